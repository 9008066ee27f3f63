/// Side effects requested by the key handler and carried out by the main loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    Checkout,
    SubmitRegistration,
    NavigateToLogin,
    Quit,
}
