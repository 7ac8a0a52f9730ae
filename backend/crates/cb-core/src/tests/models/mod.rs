mod list_order;
mod recipe;
mod recipe_draft;
mod renderable_recipe;
