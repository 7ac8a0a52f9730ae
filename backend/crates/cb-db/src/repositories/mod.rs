pub mod owned_mutation;
pub mod recipe_repository;
pub mod user_repository;
