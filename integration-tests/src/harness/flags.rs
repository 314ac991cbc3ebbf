use gateward_core::conf::RuntimeFlags;

/// Stock corpus settings: both toggles on, local gateway, public ipfs.io.
pub fn corpus_flags() -> RuntimeFlags {
    RuntimeFlags::default()
}

pub fn redirect_disabled() -> RuntimeFlags {
    RuntimeFlags {
        redirect_enabled: false,
        ..RuntimeFlags::default()
    }
}

pub fn catch_disabled() -> RuntimeFlags {
    RuntimeFlags {
        catch_unhandled_protocols: false,
        ..RuntimeFlags::default()
    }
}
