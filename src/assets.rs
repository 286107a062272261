use crate::constants::FACE_TEXTURE_SIZE;
use crate::core::{placeholder_face_rgba, FaceValue, GameConfig, GameError};
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// RGBA8 pixels for all six faces, in face order, each `FACE_TEXTURE_SIZE` square.
///
/// Loaded once at mount. A face that fails to load gets a generated placeholder.
pub async fn load_face_layers(config: &GameConfig) -> Vec<Vec<u8>> {
    let mut layers = Vec::with_capacity(FaceValue::ALL.len());
    for face in FaceValue::ALL {
        let url = config.face_texture_url(face);
        let pixels = match load_face(&url).await {
            Ok(px) => px,
            Err(e) => {
                log::warn!("[assets] {e}; using placeholder for face {face}");
                placeholder_face_rgba(face, FACE_TEXTURE_SIZE)
            }
        };
        layers.push(pixels);
    }
    layers
}

async fn load_face(url: &str) -> Result<Vec<u8>, GameError> {
    let fail = |what: &str| GameError::AssetLoadFailure(format!("{url} ({what})"));
    let img = web::HtmlImageElement::new().map_err(|_| fail("image element"))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|_| fail("decode"))?;

    // resample through a 2D canvas to get tightly packed RGBA
    let document = dom::window_document().ok_or_else(|| fail("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| fail("canvas"))?
        .dyn_into()
        .map_err(|_| fail("canvas"))?;
    let size = FACE_TEXTURE_SIZE;
    canvas.set_width(size);
    canvas.set_height(size);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| fail("2d context"))?
        .ok_or_else(|| fail("2d context"))?
        .dyn_into()
        .map_err(|_| fail("2d context"))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, size as f64, size as f64)
        .map_err(|_| fail("draw"))?;
    let data = ctx
        .get_image_data(0.0, 0.0, size as f64, size as f64)
        .map_err(|_| fail("read back"))?;
    Ok(data.data().0)
}
