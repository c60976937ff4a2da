//! Exception categories the reporter treats specially.
//!
//! Rather than walking the class hierarchy at report time, each exception is
//! classified once, when it's made.

/// What kind of exception something is, for the purposes of reporting it and
/// picking an exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    /// An instance of exactly the runtime's generic error class. With an
    /// empty message these are reported as "unhandled exception".
    Generic,

    /// The stack overflowed. These have very long, very repetitive
    /// backtraces which are cut down when printed.
    StackOverflow,

    /// A request to exit the process with a status.
    Exit { status: i32 },

    /// A request to terminate the process by a signal.
    Signal { signo: i32 },

    /// A failed system call. If the error number maps to a signal, `signo`
    /// holds it.
    SystemCall { signo: Option<i32> },

    /// Everything else.
    #[default]
    Other,
}

impl Category {
    /// The exit status requested, if this is a request to exit.
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            Category::Exit { status } => Some(*status),
            _ => None,
        }
    }

    /// The signal requested, if this is a request to be terminated by one.
    pub fn termination_signal(&self) -> Option<i32> {
        match self {
            Category::Signal { signo } => Some(*signo),
            _ => None,
        }
    }

    /// Is this a system call error which has already been mapped to a signal?
    pub fn is_mapped_system_call_error(&self) -> bool {
        matches!(self, Category::SystemCall { signo: Some(_) })
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, Category::Generic)
    }

    pub fn is_stack_overflow(&self) -> bool {
        matches!(self, Category::StackOverflow)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn capabilities() {
        assert_eq!(Category::Exit { status: 7 }.exit_status(), Some(7));
        assert_eq!(Category::Generic.exit_status(), None);
        assert_eq!(Category::Signal { signo: 15 }.termination_signal(), Some(15));
        assert!(Category::SystemCall { signo: Some(2) }.is_mapped_system_call_error());
        assert!(!Category::SystemCall { signo: None }.is_mapped_system_call_error());
    }
}
