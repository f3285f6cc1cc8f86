// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::RivuletError;
use rivulet_stream_time::DebounceConfig;
use std::time::Duration;

#[test]
fn test_config_from_millis() {
    let config = DebounceConfig::from_millis(250);
    assert_eq!(config.window(), Duration::from_millis(250));
}

#[test]
fn test_config_from_duration() {
    let config: DebounceConfig = Duration::from_secs(2).into();
    assert_eq!(config, DebounceConfig::new(Duration::from_secs(2)));
}

#[test]
fn test_config_accepts_zero_window() -> anyhow::Result<()> {
    let config = DebounceConfig::try_from_millis(0)?;
    assert_eq!(config.window(), Duration::ZERO);
    Ok(())
}

#[test]
fn test_config_rejects_negative_millis() {
    let err = DebounceConfig::try_from_millis(-5).unwrap_err();

    assert!(matches!(err, RivuletError::InvalidArgument { .. }));
    assert!(err.to_string().contains("-5ms"));
}

#[test]
fn test_config_from_fractional_millis() -> anyhow::Result<()> {
    let config = DebounceConfig::try_from_millis_f64(1.5)?;
    assert_eq!(config.window(), Duration::from_micros(1500));
    Ok(())
}

#[test]
fn test_config_rejects_invalid_fractional_windows() {
    for ms in [-1.0, f64::NAN, f64::INFINITY] {
        let err = DebounceConfig::try_from_millis_f64(ms).unwrap_err();
        assert!(
            matches!(err, RivuletError::InvalidArgument { .. }),
            "expected InvalidArgument for {ms}"
        );
    }
}

#[test]
fn test_config_rejects_negative_seconds() {
    let err = DebounceConfig::try_from_secs_f64(-0.5).unwrap_err();
    assert!(err.is_misuse());
}
