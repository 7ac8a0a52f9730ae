/// Yes/no prompt shown before a destructive action.
///
/// Any `Fn(&str) -> bool` closure works as a confirmation.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
