use crate::core::{AccelerationSample, GameError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Outcome of starting a permission request from inside a click handler.
pub enum PermissionRequest {
    /// No explicit grant is required on this platform.
    Implicit,
    /// iOS-style prompt in flight; settle with [`await_permission`].
    Pending(js_sys::Promise),
}

/// Must run synchronously inside the user gesture: iOS only shows the
/// prompt while the click's transient activation is live.
pub fn begin_permission_request() -> Result<PermissionRequest, GameError> {
    let global = js_sys::global();
    let ctor = js_sys::Reflect::get(&global, &JsValue::from_str("DeviceMotionEvent"))
        .map_err(|e| GameError::SensorUnavailable(format!("{:?}", e)))?;
    if ctor.is_undefined() {
        return Err(GameError::SensorUnavailable(
            "DeviceMotionEvent is not supported".to_string(),
        ));
    }
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .map_err(|e| GameError::SensorUnavailable(format!("{:?}", e)))?;
    let Some(func) = request.dyn_ref::<js_sys::Function>() else {
        log::info!("[motion] DeviceMotionEvent.requestPermission is not defined");
        return Ok(PermissionRequest::Implicit);
    };
    let promise = func
        .call0(&ctor)
        .map_err(|e| GameError::SensorUnavailable(format!("{:?}", e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|e| GameError::SensorUnavailable(format!("{:?}", e)))?;
    Ok(PermissionRequest::Pending(promise))
}

/// Resolves to `Ok(())` only for an explicit "granted".
pub async fn await_permission(promise: js_sys::Promise) -> Result<(), GameError> {
    match JsFuture::from(promise).await {
        Ok(state) if state.as_string().as_deref() == Some("granted") => Ok(()),
        Ok(state) => {
            log::warn!(
                "[motion] permission to access device motion was denied ({:?})",
                state.as_string()
            );
            Err(GameError::PermissionDenied)
        }
        Err(e) => {
            log::error!("[motion] error requesting device motion permission: {:?}", e);
            Err(GameError::PermissionDenied)
        }
    }
}

/// `None` when the event carries no gravity-free acceleration. Missing axes read as 0.
pub fn sample_from_event(ev: &web::DeviceMotionEvent) -> Option<AccelerationSample> {
    let a = ev.acceleration()?;
    Some(AccelerationSample::new(
        a.x().unwrap_or(0.0),
        a.y().unwrap_or(0.0),
        a.z().unwrap_or(0.0),
    ))
}

/// Live `devicemotion` listener. Dropping it removes the listener.
pub struct MotionSubscription {
    window: web::Window,
    callback: Closure<dyn FnMut(web::DeviceMotionEvent)>,
}

impl MotionSubscription {
    pub fn attach(mut on_sample: impl FnMut(AccelerationSample) + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let callback = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
            if let Some(sample) = sample_from_event(&ev) {
                on_sample(sample);
            }
        }) as Box<dyn FnMut(web::DeviceMotionEvent)>);
        // on failure `callback` is dropped here, nothing stays registered
        window
            .add_event_listener_with_callback("devicemotion", callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("devicemotion listener: {:?}", e))?;
        Ok(Self { window, callback })
    }
}

impl Drop for MotionSubscription {
    fn drop(&mut self) {
        _ = self.window.remove_event_listener_with_callback(
            "devicemotion",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Owns at most one subscription; samples flow only while it is active.
#[derive(Default)]
pub struct MotionSampler {
    subscription: Option<MotionSubscription>,
}

impl MotionSampler {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribes unless already active.
    pub fn start(
        &mut self,
        on_sample: impl FnMut(AccelerationSample) + 'static,
    ) -> anyhow::Result<()> {
        if self.subscription.is_none() {
            self.subscription = Some(MotionSubscription::attach(on_sample)?);
            log::info!("[motion] sampling started");
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.subscription.take().is_some() {
            log::info!("[motion] sampling stopped");
        }
    }
}
