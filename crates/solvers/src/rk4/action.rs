/// Control actions supported by the RK4 trajectory drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the trajectory recorded so far.
    StopEarly,
}
