//! Bindings to the `<model-viewer>` element and the two core seams it backs:
//! object-URL sources for file intake and the camera surface.

use viewer_core::{CameraSurface, IntakeError, ModelSource, ViewerCapabilities, ViewerConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = web::HtmlElement, extends = web::Element, extends = web::EventTarget)]
    #[derive(Clone, Debug)]
    pub type ModelViewerElement;

    #[wasm_bindgen(method, setter = src)]
    pub fn set_src(this: &ModelViewerElement, value: &str);

    #[wasm_bindgen(method, getter = autoRotate)]
    pub fn auto_rotate(this: &ModelViewerElement) -> bool;
    #[wasm_bindgen(method, setter = autoRotate)]
    pub fn set_auto_rotate(this: &ModelViewerElement, value: bool);

    #[wasm_bindgen(method, setter = autoRotateDelay)]
    fn set_auto_rotate_delay(this: &ModelViewerElement, value: u32);
    #[wasm_bindgen(method, setter = rotationPerSecond)]
    fn set_rotation_per_second(this: &ModelViewerElement, value: &str);
    #[wasm_bindgen(method, setter = cameraControls)]
    fn set_camera_controls(this: &ModelViewerElement, value: bool);
    #[wasm_bindgen(method, setter = interactionPolicy)]
    fn set_interaction_policy(this: &ModelViewerElement, value: &str);

    #[wasm_bindgen(method, js_name = resetTurntableRotation)]
    fn reset_turntable_rotation(this: &ModelViewerElement);
    #[wasm_bindgen(method, js_name = jumpCameraToGoal)]
    fn jump_camera_to_goal(this: &ModelViewerElement);
    #[wasm_bindgen(method, js_name = requestFullscreen)]
    fn request_fullscreen_async(this: &ModelViewerElement) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = customElements, js_name = whenDefined)]
    fn when_defined(name: &str) -> js_sys::Promise;
}

impl ModelViewerElement {
    /// The page lookup already checked the tag name.
    pub fn from_element(el: web::HtmlElement) -> Self {
        el.unchecked_into()
    }
}

/// Wait until the custom element is registered and upgraded.
pub async fn wait_until_defined() -> anyhow::Result<()> {
    JsFuture::from(when_defined(crate::constants::MODEL_VIEWER_TAG))
        .await
        .map_err(|e| anyhow::anyhow!("model-viewer never became defined: {:?}", e))?;
    Ok(())
}

pub fn configure(viewer: &ModelViewerElement, config: &ViewerConfig) {
    viewer.set_auto_rotate(true);
    viewer.set_auto_rotate_delay(config.auto_rotate_delay_ms);
    viewer.set_rotation_per_second(&config.rotation_per_second);
    viewer.set_camera_controls(true);
    viewer.set_interaction_policy(&config.interaction_policy);
    log::info!(
        "[viewer] configured: auto-rotate after {}ms at {}, camera controls on",
        config.auto_rotate_delay_ms,
        config.rotation_per_second
    );
}

fn has_method(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map(|v| v.is_function())
        .unwrap_or(false)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectUrl(pub String);

/// Feeds selected files to the viewer as `blob:` object URLs.
pub struct ObjectUrlSource {
    viewer: ModelViewerElement,
}

impl ObjectUrlSource {
    pub fn new(viewer: ModelViewerElement) -> Self {
        Self { viewer }
    }
}

impl ModelSource for ObjectUrlSource {
    type Bytes = web::File;
    type Handle = ObjectUrl;

    fn create_reference(&self, bytes: &web::File) -> Result<ObjectUrl, IntakeError> {
        web::Url::create_object_url_with_blob(bytes)
            .map(ObjectUrl)
            .map_err(|e| IntakeError::ReferenceUnavailable(format!("{:?}", e)))
    }

    fn assign_source(&self, handle: &ObjectUrl) {
        self.viewer.set_src(&handle.0);
    }

    fn release_reference(&self, handle: ObjectUrl) {
        if let Err(e) = web::Url::revoke_object_url(&handle.0) {
            log::warn!("[viewer] revoke {} failed: {:?}", handle.0, e);
        }
    }
}

/// Camera-facing view of the viewer with its optional methods probed once.
pub struct ModelViewer {
    element: ModelViewerElement,
    document: web::Document,
    capabilities: ViewerCapabilities,
}

impl ModelViewer {
    pub fn probe(element: ModelViewerElement, document: web::Document) -> Self {
        let capabilities = ViewerCapabilities {
            reset_turntable: has_method(&element, "resetTurntableRotation"),
            jump_to_goal: has_method(&element, "jumpCameraToGoal"),
        };
        log::info!("[viewer] capabilities: {:?}", capabilities);
        Self {
            element,
            document,
            capabilities,
        }
    }

    pub fn element(&self) -> &ModelViewerElement {
        &self.element
    }
}

impl CameraSurface for ModelViewer {
    fn capabilities(&self) -> ViewerCapabilities {
        self.capabilities
    }

    fn reset_turntable_rotation(&self) {
        self.element.reset_turntable_rotation();
    }

    fn jump_camera_to_goal(&self) {
        self.element.jump_camera_to_goal();
    }

    fn auto_rotate(&self) -> bool {
        self.element.auto_rotate()
    }

    fn set_auto_rotate(&self, enabled: bool) {
        self.element.set_auto_rotate(enabled);
    }

    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn request_fullscreen(&self) {
        let request = self.element.request_fullscreen_async();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(request).await {
                log::warn!("[camera] fullscreen not supported or denied: {:?}", e);
            }
        });
    }

    fn exit_fullscreen(&self) {
        _ = self.document.exit_fullscreen();
    }
}
