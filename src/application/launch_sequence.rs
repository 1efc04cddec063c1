//! Ordering of asynchronous gallery launches.
//!
//! Starting the gallery awaits the GPU, so a second start or a stop can arrive
//! while a launch is still in flight. Each launch takes a ticket; only the
//! holder of the newest ticket may install its gallery.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchTicket(u64);

#[derive(Debug, Default)]
pub struct LaunchSequence {
    generation: u64,
}

impl LaunchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a launch, superseding every earlier ticket.
    pub fn begin(&mut self) -> LaunchTicket {
        self.generation += 1;
        LaunchTicket(self.generation)
    }

    /// Invalidate launches still in flight.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, ticket: LaunchTicket) -> bool {
        ticket.0 == self.generation
    }
}
