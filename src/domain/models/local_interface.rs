/// A network interface and its addresses in `ip/prefix` form, in OS order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalInterface {
    pub name: String,
    pub addresses: Vec<String>,
}

impl LocalInterface {
    pub fn new(name: impl Into<String>, addresses: Vec<String>) -> Self {
        Self {
            name: name.into(),
            addresses,
        }
    }
}
