use serde::Deserialize;

/// One face found in a submitted image
///
/// The API returns an array of these, largest face first. Landmarks are never
/// requested, so only the face id and the requested attributes are decoded.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceDetection {
    pub face_id: String,
    pub face_attributes: FaceAttributes,
}

#[derive(Debug, Deserialize)]
pub struct FaceAttributes {
    pub age: f64,
    pub gender: String,
    pub emotion: EmotionScores,
}

/// Confidence scores across the emotions the API recognises
///
/// Scores are normalised across the set and sum to one.
#[derive(Debug, Deserialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub contempt: f64,
    pub disgust: f64,
    pub fear: f64,
    pub happiness: f64,
    pub neutral: f64,
    pub sadness: f64,
    pub surprise: f64,
}
