//! Audio command and response messages.

use bevy_ecs::message::Message;

/// Commands sent *to* the audio backend thread.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    LoadFx { id: String, path: String },
    /// Fire-and-forget sound effect trigger.
    PlayFx { id: String },
    Shutdown,
}

/// Messages sent *back* from the audio backend thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
}
