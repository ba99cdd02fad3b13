use std::time::Duration;

/// End-of-tick delay.
pub trait Pacer {
    fn wait(&mut self, delay: Duration);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn wait(&mut self, delay: Duration) {
        (**self).wait(delay)
    }
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Records requested delays without sleeping.
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    pub delays: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn wait(&mut self, delay: Duration) {
        self.delays.push(delay);
    }
}
