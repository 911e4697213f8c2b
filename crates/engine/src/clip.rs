//! Clip generator facade

use std::ffi::{c_char, CStr};

use skyparkour_sdk::{ClipTrigger, HkbClipGenerator, HkbContext, HostApi};

use crate::globals::HostGlobals;

/// Read access to an activated clip generator and its behavior graph
pub trait ClipSource {
    /// Animation file the clip plays
    fn animation_name(&self) -> Option<String>;

    /// The clip's trigger array in stored (chronological) order.
    /// Empty when the clip has no trigger array.
    fn triggers(&self) -> Vec<ClipTrigger>;

    /// Resolve an event id through the owning graph's string table.
    /// `None` when the graph or its string data is unavailable.
    fn event_name(&self, event_id: u32) -> Option<String>;
}

/// A clip generator inside a hook callback
pub struct HostClip {
    api: &'static HostApi,
    clip: *mut HkbClipGenerator,
    context: *const HkbContext,
}

impl HostClip {
    pub fn new(
        globals: &HostGlobals,
        clip: *mut HkbClipGenerator,
        context: *const HkbContext,
    ) -> Option<Self> {
        if clip.is_null() {
            return None;
        }
        Some(Self {
            api: globals.api(),
            clip,
            context,
        })
    }
}

/// Copy a host-owned C string, tolerating null
unsafe fn host_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

impl ClipSource for HostClip {
    fn animation_name(&self) -> Option<String> {
        unsafe { host_string((self.api.clip_animation_name)(self.clip)) }
    }

    fn triggers(&self) -> Vec<ClipTrigger> {
        let count = unsafe { (self.api.clip_trigger_count)(self.clip) };
        let mut triggers = Vec::with_capacity(count as usize);

        for index in 0..count {
            let mut trigger = ClipTrigger::default();
            if unsafe { (self.api.clip_trigger)(self.clip, index, &mut trigger) } {
                triggers.push(trigger);
            }
        }

        triggers
    }

    fn event_name(&self, event_id: u32) -> Option<String> {
        if self.context.is_null() {
            return None;
        }
        unsafe { host_string((self.api.context_event_name)(self.context, event_id)) }
    }
}
