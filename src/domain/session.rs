/// Who is signed in. At most one account is authenticated at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        handle: String,
    },
}

impl Session {
    pub fn handle(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { handle } => Some(handle.as_str()),
        }
    }
}
