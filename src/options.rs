#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub debug: bool,
    pub profile: bool,
}
