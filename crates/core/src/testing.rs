//! In-memory host fakes for unit tests

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use skyparkour_engine::{ClipSource, LedgeIndicator, LedgeProbe, PlayerActor, ScriptBridge};
use skyparkour_sdk::{ClipTrigger, IndicatorStyle, NiPoint3};

static SHARED_CONTEXT: Mutex<()> = Mutex::new(());

/// Serialize tests that touch the process-wide parkour context
pub fn lock_shared_context() -> MutexGuard<'static, ()> {
    SHARED_CONTEXT.lock()
}

#[derive(Debug, Default)]
pub struct FakePlayer {
    pub position: NiPoint3,
    pub set_positions: Vec<NiPoint3>,
    pub angle: NiPoint3,
    pub scale: f32,
    pub moving: bool,
    pub swimming: bool,
    pub third_person: bool,
    pub support_cleared: usize,
    pub controller_pitch: f32,
    pub in_air_forced: usize,
    pub fall_time: f32,
    pub graph_ints: Vec<(String, i32)>,
    pub graph_events: Vec<String>,
    pub reject_graph_events: bool,
    pub controls: Vec<(u32, bool)>,
    pub stamina: f32,
    pub stamina_damage: f32,
    pub meter_flashes: usize,
}

impl FakePlayer {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            third_person: true,
            stamina: 100.0,
            ..Default::default()
        }
    }
}

impl PlayerActor for FakePlayer {
    fn position(&self) -> NiPoint3 {
        self.position
    }

    fn set_position(&mut self, pos: NiPoint3) {
        self.position = pos;
        self.set_positions.push(pos);
    }

    fn angle(&self) -> NiPoint3 {
        self.angle
    }

    fn set_look_pitch(&mut self, pitch: f32) {
        self.angle.x = pitch;
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn is_moving(&self) -> bool {
        self.moving
    }

    fn is_swimming(&self) -> bool {
        self.swimming
    }

    fn is_third_person(&self) -> bool {
        self.third_person
    }

    fn clear_support_flag(&mut self) {
        self.support_cleared += 1;
    }

    fn controller_pitch(&self) -> f32 {
        self.controller_pitch
    }

    fn set_controller_pitch(&mut self, pitch: f32) {
        self.controller_pitch = pitch;
    }

    fn force_in_air(&mut self) {
        self.in_air_forced += 1;
    }

    fn fall_time(&self) -> f32 {
        self.fall_time
    }

    fn set_graph_variable_int(&mut self, name: &str, value: i32) -> bool {
        self.graph_ints.push((name.to_string(), value));
        true
    }

    fn notify_animation_graph(&mut self, event: &str) -> bool {
        self.graph_events.push(event.to_string());
        !self.reject_graph_events
    }

    fn toggle_controls(&mut self, controls: u32, enable: bool) {
        self.controls.push((controls, enable));
    }

    fn stamina(&self) -> f32 {
        self.stamina
    }

    fn damage_stamina(&mut self, amount: f32) {
        self.stamina -= amount;
        self.stamina_damage += amount;
    }

    fn flash_stamina_meter(&mut self) {
        self.meter_flashes += 1;
    }
}

/// Clip with a trigger array and an optional string table
#[derive(Debug, Default)]
pub struct FakeClip {
    pub triggers: Vec<ClipTrigger>,
    pub event_names: Option<Vec<String>>,
}

impl FakeClip {
    pub fn with_annotations(annotations: &[(f32, &str)]) -> Self {
        let mut names: Vec<String> = Vec::new();
        let mut triggers = Vec::new();
        for &(time, name) in annotations {
            let id = match names.iter().position(|n| n == name) {
                Some(id) => id,
                None => {
                    names.push(name.to_string());
                    names.len() - 1
                }
            };
            triggers.push(ClipTrigger {
                local_time: time,
                event_id: id as u32,
                is_annotation: true,
            });
        }
        Self {
            triggers,
            event_names: Some(names),
        }
    }
}

impl ClipSource for FakeClip {
    fn animation_name(&self) -> Option<String> {
        Some("Animations\\SkyParkour\\Test.hkx".to_string())
    }

    fn triggers(&self) -> Vec<ClipTrigger> {
        self.triggers.clone()
    }

    fn event_name(&self, event_id: u32) -> Option<String> {
        self.event_names.as_ref()?.get(event_id as usize).cloned()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCall {
    Translate { position: NiPoint3, speed: f32 },
    Stop,
}

#[derive(Debug, Clone, Default)]
pub struct FakeBridge {
    pub calls: Arc<Mutex<Vec<BridgeCall>>>,
}

impl ScriptBridge for FakeBridge {
    fn translate_to(&self, position: NiPoint3, _rotation: NiPoint3, speed: f32, _max: f32) -> bool {
        self.calls.lock().push(BridgeCall::Translate { position, speed });
        true
    }

    fn stop_translation(&self) -> bool {
        self.calls.lock().push(BridgeCall::Stop);
        true
    }
}

/// Probe returning canned results
#[derive(Debug, Default)]
pub struct FakeProbe {
    pub vault: (i32, NiPoint3),
    pub ledge: (i32, NiPoint3),
    pub water: Option<f32>,
    pub dir: NiPoint3,
    pub allowed: bool,
    pub vault_checks: usize,
}

impl FakeProbe {
    pub fn nothing() -> Self {
        Self {
            vault: (-1, NiPoint3::ZERO),
            ledge: (-1, NiPoint3::ZERO),
            dir: NiPoint3::new(0.0, 1.0, 0.0),
            allowed: true,
            ..Default::default()
        }
    }
}

impl LedgeProbe for FakeProbe {
    fn ledge_check(&mut self, _dir: NiPoint3, _min: f32, _max: f32) -> (i32, NiPoint3) {
        self.ledge
    }

    fn vault_check(&mut self, _dir: NiPoint3, _len: f32, _elev: f32, _min: f32, _max: f32) -> (i32, NiPoint3) {
        self.vault_checks += 1;
        self.vault
    }

    fn water_height(&self, _at: NiPoint3) -> Option<f32> {
        self.water
    }

    fn player_dir_flat(&self) -> NiPoint3 {
        self.dir
    }

    fn is_parkour_allowed(&self) -> bool {
        self.allowed
    }
}

/// Records marker placements; `enabled` is `None` until first toggled
#[derive(Debug, Default)]
pub struct FakeIndicator {
    pub placed: Vec<(IndicatorStyle, NiPoint3, f32)>,
    pub enabled: Option<bool>,
}

impl LedgeIndicator for FakeIndicator {
    fn place(&mut self, style: IndicatorStyle, at: NiPoint3, yaw: f32) {
        self.placed.push((style, at, yaw));
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = Some(enabled);
    }
}
