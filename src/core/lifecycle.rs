/// Display run state: `Created -> Running -> Stopped`, the last being terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Created,
    Running,
    Stopped,
}

impl Lifecycle {
    /// Move to `Running`; a stopped lifecycle cannot restart.
    /// Returns whether the state is now running.
    pub fn start(&mut self) -> bool {
        if *self == Lifecycle::Created {
            *self = Lifecycle::Running;
        }
        self.is_running()
    }

    pub fn quit(&mut self) {
        *self = Lifecycle::Stopped;
    }

    pub fn is_running(&self) -> bool {
        *self == Lifecycle::Running
    }

    pub fn is_stopped(&self) -> bool {
        *self == Lifecycle::Stopped
    }
}
