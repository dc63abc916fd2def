use serde::{Deserialize, Serialize};

/// Payload posted when an upload is expected to have landed in storage.
///
/// Only `gcsPath` drives behavior. The job id is carried into logs; the signed URL
/// and resumable-session URL are accepted for compatibility with the task producer
/// but not consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescriptor {
    pub gcs_path: String,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub signed_url: Option<String>,
    #[serde(default)]
    pub session_url: Option<String>,
}

impl TaskDescriptor {
    /// Job id for logging; empty or missing ids are reported as "-".
    pub fn job_id_or_placeholder(&self) -> &str {
        match self.job_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => "-",
        }
    }

    pub fn has_session_url(&self) -> bool {
        self.session_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let task: TaskDescriptor = serde_json::from_str(
            r#"{
                "gcsPath": "gs://my-bucket/uploads/file.txt",
                "jobId": "abc",
                "signedUrl": "https://storage.example/signed",
                "sessionUrl": "https://storage.example/session"
            }"#,
        )
        .unwrap();
        assert_eq!(task.gcs_path, "gs://my-bucket/uploads/file.txt");
        assert_eq!(task.job_id_or_placeholder(), "abc");
        assert!(task.has_session_url());
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let task: TaskDescriptor = serde_json::from_str(r#"{"gcsPath":"not-a-uri"}"#).unwrap();
        assert_eq!(task.gcs_path, "not-a-uri");
        assert!(task.job_id.is_none());
        assert!(task.signed_url.is_none());
        assert_eq!(task.job_id_or_placeholder(), "-");
        assert!(!task.has_session_url());
    }

    #[test]
    fn test_empty_session_url_counts_as_absent() {
        let task: TaskDescriptor =
            serde_json::from_str(r#"{"gcsPath":"gs://b/k","sessionUrl":"","jobId":""}"#).unwrap();
        assert!(!task.has_session_url());
        assert_eq!(task.job_id_or_placeholder(), "-");
    }

    #[test]
    fn test_missing_path_is_rejected() {
        assert!(serde_json::from_str::<TaskDescriptor>(r#"{"jobId":"abc"}"#).is_err());
        assert!(serde_json::from_str::<TaskDescriptor>(r#"{"gcsPath":42}"#).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let task: TaskDescriptor =
            serde_json::from_str(r#"{"gcsPath":"gs://b/k","expectedContentType":"image/jpeg"}"#)
                .unwrap();
        assert_eq!(task.gcs_path, "gs://b/k");
    }
}
