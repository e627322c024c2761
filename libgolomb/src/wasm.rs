use wasm_bindgen::prelude::*;

use crate::core::{ContainerKind, GolombError, ImagePredictor, NegativeMode};
use crate::Reader;

/// turn an error into js
fn to_js_err(e: GolombError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// encode a PCM16 WAV file to GBL1
#[wasm_bindgen]
pub fn encode_wav(wav: &[u8], sign_magnitude: bool) -> Result<Vec<u8>, JsValue> {
    let mode = if sign_magnitude {
        NegativeMode::SignMagnitude
    } else {
        NegativeMode::ZigzagInterleaved
    };
    crate::encode_wav(wav, mode).map_err(to_js_err)
}

/// decode a GBL1 file to a PCM16 WAV file
#[wasm_bindgen]
pub fn decode_gbl(gbl: &[u8]) -> Result<Vec<u8>, JsValue> {
    crate::decode_to_wav(gbl).map_err(to_js_err)
}

/// encode a grayscale buffer to GIMG
///
/// # Arguments
/// * `pixels` - row-major 8-bit gray, `width * height` bytes
/// * `predictor` - 0 = left, 1 = median
#[wasm_bindgen]
pub fn encode_gray(
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    predictor: u8,
) -> Result<Vec<u8>, JsValue> {
    let predictor = ImagePredictor::try_from(predictor).map_err(to_js_err)?;
    crate::encode_gray(width, height, pixels, predictor).map_err(to_js_err)
}

/// decode a GIMG file to `{ width, height, pixels }`
#[wasm_bindgen]
pub fn decode_gimg(gimg: &[u8]) -> Result<JsValue, JsValue> {
    let image = crate::decode_gray(gimg).map_err(to_js_err)?;

    let obj = js_sys::Object::new();
    js_sys::Reflect::set(&obj, &"width".into(), &image.width().into())?;
    js_sys::Reflect::set(&obj, &"height".into(), &image.height().into())?;
    js_sys::Reflect::set(
        &obj,
        &"pixels".into(),
        &js_sys::Uint8Array::from(image.pixels()).into(),
    )?;
    Ok(obj.into())
}

/// header of either container as a plain object
#[wasm_bindgen]
pub fn container_header(data: &[u8]) -> Result<JsValue, JsValue> {
    let reader = Reader::new();
    let value = match ContainerKind::detect(data) {
        Some(ContainerKind::Audio) => {
            let file = reader.read_audio(data).map_err(to_js_err)?;
            serde_wasm_bindgen::to_value(&file.header)?
        }
        Some(ContainerKind::Image) => {
            let file = reader.read_image(data).map_err(to_js_err)?;
            serde_wasm_bindgen::to_value(&file.header)?
        }
        None => return Err(JsValue::from_str("unknown container")),
    };
    Ok(value)
}
