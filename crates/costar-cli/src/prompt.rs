//! Terminal prompts for missing and ambiguous names.

use costar_core::store::EntityStore;
use costar_core::types::PersonId;
use dialoguer::{Input, Select};

/// Ask for a person's name.
pub fn input_name(prompt: &str) -> Result<String, dialoguer::Error> {
    Input::<String>::new().with_prompt(prompt).interact_text()
}

/// Disambiguate between several people sharing one name. Candidates are
/// listed in the order given (ascending id, from the name index).
pub fn select_person(
    store: &EntityStore,
    name: &str,
    candidates: &[PersonId],
) -> Result<PersonId, dialoguer::Error> {
    let labels: Vec<String> = candidates.iter().map(|id| describe(store, id)).collect();
    let choice = Select::new()
        .with_prompt(format!("Which '{}'?", name))
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(candidates[choice].clone())
}

/// `name (born year) [id]`, or `name [id]` when the birth year is unknown.
pub fn describe(store: &EntityStore, id: &PersonId) -> String {
    match store.person(id) {
        Ok(person) => match &person.birth {
            Some(birth) => format!("{} (born {}) [{}]", person.name, birth, id),
            None => format!("{} [{}]", person.name, id),
        },
        Err(_) => id.to_string(),
    }
}
