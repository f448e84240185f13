//! Static label-to-crop and crop-to-image tables with the display fallback.
//!
//! These are fixed at build time. The mapper is total: every integer label
//! produces a message and an image filename.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Image served when a crop has no dedicated picture or the label is unknown.
pub const DEFAULT_IMAGE: &str = "default.jpg";

/// Message shown when the classifier returns a label outside the crop table.
pub const UNDETERMINED_MESSAGE: &str =
    "Sorry, we could not determine the best crop with the provided data.";

lazy_static! {
    static ref CROPS: HashMap<i64, &'static str> = {
        let mut m = HashMap::new();
        m.insert(1, "Rice");
        m.insert(2, "Maize");
        m.insert(3, "Jute");
        m.insert(4, "Cotton");
        m.insert(5, "Coconut");
        m.insert(6, "Papaya");
        m.insert(7, "Orange");
        m.insert(8, "Apple");
        m.insert(9, "Muskmelon");
        m.insert(10, "Watermelon");
        m.insert(11, "Grapes");
        m.insert(12, "Mango");
        m.insert(13, "Banana");
        m.insert(14, "Pomegranate");
        m.insert(15, "Lentil");
        m.insert(16, "Blackgram");
        m.insert(17, "Mungbean");
        m.insert(18, "Mothbeans");
        m.insert(19, "Pigeonpeas");
        m.insert(20, "Kidneybeans");
        m.insert(21, "Chickpea");
        m.insert(22, "Coffee");
        m
    };
    static ref CROP_IMAGES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("Rice", "rice.jpg");
        m.insert("Maize", "maize.jpg");
        m.insert("Jute", "jute.jpg");
        m.insert("Cotton", "cotton.jpg");
        m.insert("Coconut", "coconut.jpg");
        m.insert("Papaya", "papaya.jpg");
        m.insert("Orange", "orange.jpg");
        m.insert("Apple", "apple.jpg");
        m.insert("Muskmelon", "muskmelon.jpg");
        m.insert("Watermelon", "watermelon.jpg");
        m.insert("Grapes", "grapes.jpg");
        m.insert("Mango", "mango.jpg");
        m.insert("Banana", "banana.jpg");
        m.insert("Pomegranate", "pomegranate.jpg");
        m.insert("Lentil", "lentil.jpg");
        m.insert("Blackgram", "blackgram.jpg");
        m.insert("Mungbean", "mungbean.jpg");
        m.insert("Mothbeans", "mothbeans.jpg");
        m.insert("Pigeonpeas", "pigeonpeas.jpg");
        m.insert("Kidneybeans", "kidneybeans.jpg");
        m.insert("Chickpea", "chickpea.jpg");
        m.insert("Coffee", "coffee.jpg");
        m
    };
}

/// Display result for a predicted label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub message: String,
    pub image_file: String,
}

/// Crop name for a label, if the label is in the table.
pub fn crop_name(label: i64) -> Option<&'static str> {
    CROPS.get(&label).copied()
}

/// Image filename for a crop name, falling back to `default.jpg`.
pub fn image_for(crop: &str) -> &'static str {
    CROP_IMAGES.get(crop).copied().unwrap_or(DEFAULT_IMAGE)
}

/// Map a label to its display result. Total over all integer inputs.
pub fn recommend(label: i64) -> Recommendation {
    match crop_name(label) {
        Some(crop) => Recommendation {
            message: format!("{crop} is the best crop to be cultivated right there."),
            image_file: image_for(crop).to_string(),
        },
        None => Recommendation {
            message: UNDETERMINED_MESSAGE.to_string(),
            image_file: DEFAULT_IMAGE.to_string(),
        },
    }
}
