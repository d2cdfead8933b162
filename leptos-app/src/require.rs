use wasm_bindgen::{JsCast, JsValue};

/// Helper trait for turning browser API results into `Result<T, String>`.
/// Similar to `expect` but tailored for wasm-bindgen use cases, without panicking.
pub trait Require<T> {
    fn require(self, msg: &str) -> Result<T, String>;
}

/// Render a thrown JS value for logging.
fn describe(e: &JsValue) -> String {
    if let Some(s) = e.as_string() {
        s
    } else if let Some(err) = e.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else if let Some(obj) = e.dyn_ref::<js_sys::Object>() {
        js_sys::JSON::stringify(obj).ok().and_then(|v| v.as_string()).unwrap_or_else(|| "[object]".to_string())
    } else {
        format!("{:?}", e)
    }
}

impl<T> Require<T> for Result<T, JsValue> {
    fn require(self, msg: &str) -> Result<T, String> {
        self.map_err(|e| format!("{}: {}", msg, describe(&e)))
    }
}

impl<T> Require<T> for Option<T> {
    fn require(self, msg: &str) -> Result<T, String> {
        self.ok_or_else(|| format!("{}: None", msg))
    }
}

impl<T> Require<T> for Result<Option<T>, JsValue> {
    fn require(self, msg: &str) -> Result<T, String> {
        match self {
            Ok(Some(v)) => Ok(v),
            Ok(None) => Err(format!("{}: None", msg)),
            Err(e) => Err(format!("{}: {}", msg, describe(&e))),
        }
    }
}
