//! Client-side search over an already fetched collection.

use crate::Recipe;

/// Case-insensitive substring match against the title or the space-joined
/// ingredients. `needle` must already be trimmed and lower-cased.
pub fn matches(recipe: &Recipe, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    recipe.title.to_lowercase().contains(needle)
        || recipe.ingredients.join(" ").to_lowercase().contains(needle)
}

/// Filter `recipes` by `query`, keeping their order. An empty or blank query
/// keeps everything.
pub fn apply_filter<'a, I>(query: &str, recipes: I) -> impl Iterator<Item = &'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let needle = query.trim().to_lowercase();
    recipes
        .into_iter()
        .filter(move |recipe| matches(recipe, &needle))
}
