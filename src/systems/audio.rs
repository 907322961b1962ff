//! Audio bridge systems and the background acknowledgment backend.
//!
//! The simulation emits [`AudioCmd`] messages; each frame they are forwarded
//! over a lock-free channel to a dedicated thread, and any responses are
//! pulled back into the ECS message queue:
//! - [`forward_audio_cmds`] drains `Messages<AudioCmd>` into the channel.
//! - [`poll_audio_messages`] drains the thread's responses into
//!   `Messages<AudioMessage>`.
//! - the two `update_*` systems advance the message queues once per frame.
//!
//! Actual playback is an external collaborator. The built-in [`audio_thread`]
//! is a null sink: it tracks which ids are "loaded" and acknowledges
//! commands, logging and skipping anything unknown. Plugging a real backend
//! means replacing this one function; the bridge and the command protocol
//! stay the same.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::Messages;
use bevy_ecs::{
    prelude::{MessageWriter, Res},
    system::ResMut,
};
use crossbeam_channel::{Receiver, Sender};
use log::debug;
use rustc_hash::FxHashSet;

/// Drain pending responses from the audio thread into the ECS mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(
    bridge: Res<AudioBridge>,
    mut reader: bevy_ecs::prelude::MessageReader<AudioCmd>,
) {
    for cmd in reader.read() {
        // Ignore send errors during shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread (null backend).
///
/// Processes commands until [`AudioCmd::Shutdown`]. Load commands always
/// succeed (there is nothing to load); play commands for unknown ids are
/// logged and skipped, never surfaced to the simulation.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    debug!("audio thread starting");
    let mut musics: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashSet<String> = FxHashSet::default();

    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadMusic { id, path } => {
                debug!("audio: music loaded id='{}' path='{}'", id, path);
                musics.insert(id.clone());
                let _ = tx_msg.send(AudioMessage::MusicLoaded { id });
            }
            AudioCmd::PlayMusic { id, looped } => {
                if musics.contains(&id) {
                    debug!("audio: music play id='{}' looped={}", id, looped);
                    let _ = tx_msg.send(AudioMessage::MusicPlayStarted { id });
                } else {
                    debug!("audio: music play skipped, id='{}' not loaded", id);
                }
            }
            AudioCmd::StopMusic { id } => {
                if musics.contains(&id) {
                    debug!("audio: music stop id='{}'", id);
                    let _ = tx_msg.send(AudioMessage::MusicStopped { id });
                }
            }
            AudioCmd::LoadFx { id, path } => {
                debug!("audio: fx loaded id='{}' path='{}'", id, path);
                sounds.insert(id.clone());
                let _ = tx_msg.send(AudioMessage::FxLoaded { id });
            }
            AudioCmd::PlayFx { id } => {
                if sounds.contains(&id) {
                    debug!("audio: fx play id='{}'", id);
                } else {
                    debug!("audio: fx play skipped, id='{}' not loaded", id);
                }
            }
            AudioCmd::Shutdown => {
                debug!("audio: shutdown requested");
                break;
            }
        }
    }
    debug!("audio thread exiting");
}
