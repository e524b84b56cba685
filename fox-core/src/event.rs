use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Requests raised by hotkeys and widget delegates, applied by the game
/// after the current event has been fully dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartGame,
    MainMenu,
    SelectGalaxy(usize),
    Quit,
}

/// Shared FIFO of [`Command`]s. Clones point at the same queue, so a clone
/// can be moved into a delegate closure.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    queue: Rc<RefCell<VecDeque<Command>>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, command: Command) {
        self.queue.borrow_mut().push_back(command);
    }

    pub fn drain(&self) -> Vec<Command> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}
