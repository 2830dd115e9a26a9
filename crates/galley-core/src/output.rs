//! Presentation and player messaging seams.
//!
//! Systems never render or send anything themselves. They report visual
//! state, audio and player-facing text through [`PresentationSink`] and
//! [`Messenger`]; the host decides how those reach clients. [`Outbox`]
//! records everything for the host (and tests) to drain.

use hecs::Entity;

/// Handle of a playing sound, used to stop loops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioParams {
    /// Volume offset in decibels
    pub volume: f32,
    pub looping: bool,
}

impl AudioParams {
    pub fn once(volume: f32) -> Self {
        Self {
            volume,
            looping: false,
        }
    }

    pub fn looping(volume: f32) -> Self {
        Self {
            volume,
            looping: true,
        }
    }
}

/// Appearance flags the client visualizers react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visual {
    FryerActive,
    CoffeePitcher,
    CoffeeBasket,
}

/// A localized, parameterized message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub key: &'static str,
    pub args: Vec<(&'static str, String)>,
}

impl Message {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub trait PresentationSink {
    fn set_visual(&mut self, entity: Entity, visual: Visual, on: bool);
    /// Tint an entity's sprite (hex colour)
    fn set_tint(&mut self, entity: Entity, color: &'static str);
    fn play_sound(&mut self, source: Entity, path: &str, params: AudioParams) -> SoundHandle;
    fn stop_sound(&mut self, handle: SoundHandle);
}

pub trait Messenger {
    /// Show a message to one viewer
    fn popup(&mut self, source: Entity, viewer: Entity, message: Message);
    /// Show a message to every viewer except one
    fn popup_others(&mut self, source: Entity, except: Entity, message: Message);
    /// Show a message to every viewer
    fn broadcast(&mut self, source: Entity, message: Message);
}

/// Everything a system may emit.
pub trait Output: PresentationSink + Messenger {}

impl<T: PresentationSink + Messenger> Output for T {}

/// One recorded presentation or messaging event
#[derive(Debug, Clone, PartialEq)]
pub enum OutputEvent {
    Visual {
        entity: Entity,
        visual: Visual,
        on: bool,
    },
    Tint {
        entity: Entity,
        color: &'static str,
    },
    PlaySound {
        handle: SoundHandle,
        source: Entity,
        path: String,
        params: AudioParams,
    },
    StopSound {
        handle: SoundHandle,
    },
    Popup {
        source: Entity,
        viewer: Entity,
        message: Message,
    },
    PopupOthers {
        source: Entity,
        except: Entity,
        message: Message,
    },
    Broadcast {
        source: Entity,
        message: Message,
    },
}

/// Records output events in order
#[derive(Debug, Default)]
pub struct Outbox {
    events: Vec<OutputEvent>,
    next_sound: u64,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[OutputEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<OutputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Message keys shown to `viewer`, oldest first
    pub fn popup_keys_for(&self, viewer: Entity) -> Vec<&'static str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                OutputEvent::Popup {
                    viewer: v, message, ..
                } if *v == viewer => Some(message.key),
                _ => None,
            })
            .collect()
    }

    /// Number of one-shot or looping sounds started with this path
    pub fn sounds_played(&self, path: &str) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, OutputEvent::PlaySound { path: p, .. } if p == path))
            .count()
    }

    /// Latest value of a visual flag on an entity
    pub fn visual(&self, entity: Entity, visual: Visual) -> Option<bool> {
        self.events.iter().rev().find_map(|e| match e {
            OutputEvent::Visual {
                entity: en,
                visual: v,
                on,
            } if *en == entity && *v == visual => Some(*on),
            _ => None,
        })
    }
}

impl PresentationSink for Outbox {
    fn set_visual(&mut self, entity: Entity, visual: Visual, on: bool) {
        self.events.push(OutputEvent::Visual { entity, visual, on });
    }

    fn set_tint(&mut self, entity: Entity, color: &'static str) {
        self.events.push(OutputEvent::Tint { entity, color });
    }

    fn play_sound(&mut self, source: Entity, path: &str, params: AudioParams) -> SoundHandle {
        let handle = SoundHandle(self.next_sound);
        self.next_sound += 1;
        self.events.push(OutputEvent::PlaySound {
            handle,
            source,
            path: path.to_string(),
            params,
        });
        handle
    }

    fn stop_sound(&mut self, handle: SoundHandle) {
        self.events.push(OutputEvent::StopSound { handle });
    }
}

impl Messenger for Outbox {
    fn popup(&mut self, source: Entity, viewer: Entity, message: Message) {
        self.events.push(OutputEvent::Popup {
            source,
            viewer,
            message,
        });
    }

    fn popup_others(&mut self, source: Entity, except: Entity, message: Message) {
        self.events.push(OutputEvent::PopupOthers {
            source,
            except,
            message,
        });
    }

    fn broadcast(&mut self, source: Entity, message: Message) {
        self.events.push(OutputEvent::Broadcast { source, message });
    }
}
