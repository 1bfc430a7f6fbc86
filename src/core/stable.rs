//! Stable-reference classification.
//!
//! A name is "stable" when its value is guaranteed not to change between
//! renders, so it never needs to appear in a dependency array: state
//! setters returned by `useState`, ref containers from `useRef`, runtime
//! globals, and type/constructor identifiers.

/// Runtime globals, wrapper types, DOM/event types, and pure helpers that
/// never change identity between renders.
///
/// This list is closed and hand-curated. An unknown global is not assumed
/// stable and must be declared as a dependency when referenced as a value.
pub const STABLE_GLOBALS: &[&str] = &[
    // Environment
    "window",
    "document",
    "console",
    "navigator",
    "localStorage",
    "sessionStorage",
    "undefined",
    "NaN",
    "Infinity",
    "globalThis",
    // Timers and scheduling
    "setTimeout",
    "setInterval",
    "clearTimeout",
    "clearInterval",
    "requestAnimationFrame",
    "cancelAnimationFrame",
    "queueMicrotask",
    // Containers, wrappers, built-in namespaces
    "Array",
    "Object",
    "String",
    "Number",
    "Boolean",
    "Symbol",
    "BigInt",
    "Map",
    "Set",
    "WeakMap",
    "WeakSet",
    "Promise",
    "Proxy",
    "Reflect",
    "RegExp",
    "Date",
    "Math",
    "JSON",
    "Error",
    "TypeError",
    "RangeError",
    "ArrayBuffer",
    "Uint8Array",
    // DOM and event types
    "Event",
    "CustomEvent",
    "KeyboardEvent",
    "MouseEvent",
    "TouchEvent",
    "PointerEvent",
    "AbortController",
    "IntersectionObserver",
    "ResizeObserver",
    "MutationObserver",
    "FormData",
    "URL",
    "URLSearchParams",
    "Blob",
    "File",
    "FileReader",
    "Image",
    "Audio",
    "WebSocket",
    "XMLHttpRequest",
    // Pure helpers
    "fetch",
    "alert",
    "confirm",
    "prompt",
    "parseInt",
    "parseFloat",
    "isNaN",
    "isFinite",
    "encodeURIComponent",
    "decodeURIComponent",
    "encodeURI",
    "decodeURI",
    "structuredClone",
    "btoa",
    "atob",
];

/// Whether `name` is exempt from dependency-array membership.
///
/// Pure and total: any of the four rules being true is sufficient.
pub fn is_stable(name: &str) -> bool {
    if STABLE_GLOBALS.contains(&name) {
        return true;
    }
    // State setters (`setCount`) are referentially stable across renders.
    if is_state_setter(name) {
        return true;
    }
    // Ref containers (`canvasRef`) are stable by convention.
    if name.ends_with("Ref") {
        return true;
    }
    // PascalCase names are almost always types or component constructors.
    // All-uppercase names more likely denote runtime constants and are
    // never auto-exempted.
    is_pascal_case(name) && !is_all_uppercase(name)
}

fn is_state_setter(name: &str) -> bool {
    name.strip_prefix("set")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

fn is_pascal_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

fn is_all_uppercase(name: &str) -> bool {
    !name.chars().any(|c| c.is_ascii_lowercase())
}
