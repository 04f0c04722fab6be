use std::path::Path;

use crate::face::detection::{EmotionScores, FaceDetection};

/// Report columns, in the order rows are rendered
///
/// Emotion scores carry an `emotion-` prefix so they sit on the same level as
/// the other attributes. The order is fixed so reports from different runs
/// line up.
pub const HEADER: [&str; 12] = [
    "file",
    "faceId",
    "age",
    "gender",
    "emotion-anger",
    "emotion-contempt",
    "emotion-disgust",
    "emotion-fear",
    "emotion-happiness",
    "emotion-neutral",
    "emotion-sadness",
    "emotion-surprise",
];

/// One report row: a single face detection flattened into scalar columns
#[derive(Debug)]
pub struct FaceRecord {
    pub file: String,
    pub face_id: String,
    pub age: f64,
    pub gender: String,
    pub emotion: EmotionScores,
}

impl FaceRecord {
    /// Build a row from a detection, keeping only the image file name
    pub fn new(image_path: &Path, face: FaceDetection) -> FaceRecord {
        let file = image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let attributes = face.face_attributes;
        FaceRecord {
            file,
            face_id: face.face_id,
            age: attributes.age,
            gender: attributes.gender,
            emotion: attributes.emotion,
        }
    }

    /// Render the row in `HEADER` column order
    pub fn to_csv_line(&self) -> String {
        let emotion = &self.emotion;
        let fields = [
            escape(&self.file),
            escape(&self.face_id),
            self.age.to_string(),
            escape(&self.gender),
            emotion.anger.to_string(),
            emotion.contempt.to_string(),
            emotion.disgust.to_string(),
            emotion.fear.to_string(),
            emotion.happiness.to_string(),
            emotion.neutral.to_string(),
            emotion.sadness.to_string(),
            emotion.surprise.to_string(),
        ];
        fields.join(",")
    }
}

/// Quote a field containing a comma, quote, or newline, doubling any quotes
fn escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
