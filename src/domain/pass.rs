/// One predicted ISS flyover, ready for display.
#[derive(Clone, PartialEq, Debug)]
pub struct Pass {
    /// Rise time rendered in the configured display timezone.
    pub rise_time: String,
    /// How long the pass lasts, in seconds.
    pub duration: u64,
}
