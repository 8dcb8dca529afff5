// extensions/typewriter.rs
//
// Character-by-character text reveal as an explicit, cancellable task.
// The caller owns the timer; every scheduled step carries the TaskId it was
// scheduled for, and steps for a superseded task are rejected.

/// Handle identifying one typewriter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

/// Result of advancing a typewriter task.
#[derive(Debug, Clone, PartialEq)]
pub enum TypewriterStep {
    /// The task was cancelled or replaced. Stop scheduling.
    Stale,
    /// More characters remain; call `step` again after `next_in_ms`.
    Typing { visible: String, next_in_ms: f64 },
    /// The whole text is visible. The task is finished.
    Done { visible: String },
}

#[derive(Debug, Default)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    char_ms: f64,
    started_ms: f64,
    live: Option<TaskId>,
    next_id: u64,
}

impl Typewriter {
    pub fn new(char_ms: f64) -> Self {
        Self {
            char_ms: char_ms.max(0.0),
            ..Self::default()
        }
    }

    /// Begin typing `text`, cancelling any run in progress.
    pub fn start(&mut self, text: &str, now_ms: f64) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.chars = text.chars().collect();
        self.shown = 0;
        self.started_ms = now_ms;
        self.live = Some(id);
        id
    }

    pub fn cancel(&mut self) {
        self.live = None;
    }

    pub fn is_running(&self) -> bool {
        self.live.is_some()
    }

    pub fn is_live(&self, task: TaskId) -> bool {
        self.live == Some(task)
    }

    /// Currently revealed prefix.
    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    /// Reveal every character due by `now_ms`. The first character is due at
    /// the start time, each following one `char_ms` later.
    pub fn step(&mut self, task: TaskId, now_ms: f64) -> TypewriterStep {
        if !self.is_live(task) {
            return TypewriterStep::Stale;
        }

        let total = self.chars.len();
        let due = if self.char_ms <= 0.0 {
            total
        } else {
            let elapsed = (now_ms - self.started_ms).max(0.0);
            (elapsed / self.char_ms).floor() as usize + 1
        };
        self.shown = self.shown.max(due.min(total));

        if self.shown >= total {
            self.live = None;
            return TypewriterStep::Done { visible: self.visible() };
        }

        let next_due_ms = self.started_ms + self.shown as f64 * self.char_ms;
        TypewriterStep::Typing {
            visible: self.visible(),
            next_in_ms: (next_due_ms - now_ms).max(0.0),
        }
    }
}
