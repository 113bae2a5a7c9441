// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Plinth launcher bridge.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies a single activity inside an installed application.
///
/// The OS resolves this pair at dispatch time; neither half is validated
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentName {
    /// Unique string naming the installed application.
    pub package: String,
    /// Fully qualified activity class inside that package.
    pub class_name: String,
}

impl ComponentName {
    pub fn new(package: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class_name: class_name.into(),
        }
    }
}

impl std::fmt::Display for ComponentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.package, self.class_name)
    }
}

/// One entry of the static clock-app catalog.
///
/// The catalog is a fixed lookup table consulted in order until one entry
/// resolves on the device; it is never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockAppCandidate {
    /// Human-readable vendor label (diagnostics only).
    pub label: &'static str,
    /// Package identifier of the clock app.
    pub package: &'static str,
    /// Activity class to launch.
    pub component: &'static str,
}

impl ClockAppCandidate {
    /// The (package, class) pair as an owned [`ComponentName`].
    pub fn component_name(&self) -> ComponentName {
        ComponentName::new(self.package, self.component)
    }
}

/// One request from the upper UI layer: a method name plus a key-value
/// argument bag. Created per call, discarded after dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: serde_json::Map<String, Value>,
}

impl MethodCall {
    /// Build a call with no arguments.
    pub fn bare(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: serde_json::Map::new(),
        }
    }

    /// Look up a string-typed argument. Non-string values count as absent.
    pub fn str_arg(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(Value::as_str)
    }
}

/// Named error codes carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// `getAppIconPath` called without a `packageName` argument.
    MissingPackageName,
    /// `searchGoogle` called without a `query` argument.
    MissingArgument,
    /// The named package is not installed on the device.
    NotFound,
    /// No clock app resolved, or launching the match failed.
    Unavailable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingPackageName => "MISSING_PACKAGE_NAME",
            Self::MissingArgument => "MISSING_ARGUMENT",
            Self::NotFound => "NOT_FOUND",
            Self::Unavailable => "UNAVAILABLE",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One response per request: a success value (possibly null), a structured
/// error, or the distinct not-implemented signal for unrecognized names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResponse {
    Success { value: Value },
    Error { code: ErrorCode, message: String },
    NotImplemented,
}

impl MethodResponse {
    /// Success carrying no value.
    pub fn ok_empty() -> Self {
        Self::Success { value: Value::Null }
    }

    /// Success carrying a value.
    pub fn ok(value: impl Into<Value>) -> Self {
        Self::Success {
            value: value.into(),
        }
    }

    /// A named error with a human-readable message.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Error {
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_name_displays_as_pair() {
        let cn = ComponentName::new("com.android.deskclock", "com.android.deskclock.AlarmClock");
        assert_eq!(
            cn.to_string(),
            "com.android.deskclock/com.android.deskclock.AlarmClock"
        );
    }

    #[test]
    fn str_arg_ignores_non_string_values() {
        let call: MethodCall = serde_json::from_str(
            r#"{"method":"getAppIconPath","arguments":{"packageName":42}}"#,
        )
        .unwrap();
        assert_eq!(call.str_arg("packageName"), None);
    }

    #[test]
    fn call_without_arguments_parses() {
        let call: MethodCall = serde_json::from_str(r#"{"method":"expandNotis"}"#).unwrap();
        assert_eq!(call.method, "expandNotis");
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn error_codes_serialize_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::MissingPackageName).unwrap(),
            r#""MISSING_PACKAGE_NAME""#
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::Unavailable).unwrap(),
            r#""UNAVAILABLE""#
        );
    }

    #[test]
    fn response_wire_layout_is_tagged() {
        let ok = serde_json::to_value(MethodResponse::ok("/cache/icon_a.png")).unwrap();
        assert_eq!(ok["status"], "success");
        assert_eq!(ok["value"], "/cache/icon_a.png");

        let err = serde_json::to_value(MethodResponse::error(
            ErrorCode::NotFound,
            "package not installed",
        ))
        .unwrap();
        assert_eq!(err["status"], "error");
        assert_eq!(err["code"], "NOT_FOUND");

        let ni = serde_json::to_value(MethodResponse::NotImplemented).unwrap();
        assert_eq!(ni["status"], "notImplemented");
    }
}
