use std::io::Write;
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use bombsweep_core::{GameEvent, GameListener};

/// Forwards game events to the cue thread without ever waiting for it.
#[derive(Debug)]
pub struct CueListener {
    sender: SyncSender<GameEvent>,
    dropped: u64,
}

impl CueListener {
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl GameListener for CueListener {
    fn notify(&mut self, event: &GameEvent) {
        match self.sender.try_send(event.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                self.dropped += 1;
                log::trace!("Cue still playing, dropped {:?}", event);
            }
            Err(TrySendError::Disconnected(_)) => {}
        }
    }
}

fn play_cues(receiver: Receiver<GameEvent>) {
    for event in receiver {
        let cue = match event {
            GameEvent::Revealed { .. } => "click",
            GameEvent::FlagChanged { .. } => continue,
            GameEvent::BombHit { .. } => "you-died",
            GameEvent::Won => "fanfare",
        };
        log::info!("Playing cue {}", cue);
        if matches!(event, GameEvent::BombHit { .. } | GameEvent::Won) {
            // terminal bell
            let mut stderr = std::io::stderr();
            let _ = stderr.write_all(b"\x07");
            let _ = stderr.flush();
        }
    }
}

/// Starts the cue thread. With a capacity of 1 a new cue is dropped while another one is
/// still pending. The thread ends once the listener is dropped.
pub fn spawn_cues(capacity: usize) -> (CueListener, JoinHandle<()>) {
    let (sender, receiver) = mpsc::sync_channel(capacity);
    let handle = thread::spawn(move || play_cues(receiver));
    (CueListener { sender, dropped: 0 }, handle)
}
