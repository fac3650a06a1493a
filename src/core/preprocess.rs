//! Préparation des images pour le classifieur.
//!
//! Pipeline unique: décodage → conversion RGB → redimensionnement 224×224
//! → normalisation [0,1] en tenseur NHWC, le format d'entrée de l'artefact.

use std::io::Cursor;

use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use ndarray::Array4;

use crate::infrastructure::error::{AppError, AppResult};

/// Résolution d'entrée du modèle
pub const INPUT_WIDTH: u32 = 224;
pub const INPUT_HEIGHT: u32 = 224;
pub const INPUT_CHANNELS: usize = 3;

/// Convertit un buffer d'image brut en tenseur d'entrée `(1, 224, 224, 3)`.
///
/// Accepte tout format que la bibliothèque `image` sait décoder; la
/// détection du format se fait sur le contenu, pas sur le nom de fichier.
pub fn to_input_tensor(bytes: &[u8]) -> AppResult<Array4<f32>> {
    let decoded = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AppError::ImageDecode(e.to_string()))?
        .decode()?;

    let rgb = decoded.to_rgb8();
    let resized = image::imageops::resize(&rgb, INPUT_WIDTH, INPUT_HEIGHT, FilterType::Lanczos3);

    let mut tensor = Array4::<f32>::zeros((
        1,
        INPUT_HEIGHT as usize,
        INPUT_WIDTH as usize,
        INPUT_CHANNELS,
    ));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for channel in 0..INPUT_CHANNELS {
            tensor[[0, y as usize, x as usize, channel]] = pixel[channel] as f32 / 255.0;
        }
    }

    Ok(tensor)
}
