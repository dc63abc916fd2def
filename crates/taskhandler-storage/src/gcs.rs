use crate::remote::{head_object, BucketStores};
use crate::traits::{ObjectInfo, Storage, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::{ClientOptions, ObjectStore};
use std::sync::Arc;
use std::time::Duration;
use taskhandler_core::Location;

/// Google Cloud Storage implementation
///
/// Credentials come from the environment the way the GCS client conventionally
/// finds them (`GOOGLE_SERVICE_ACCOUNT`, `GOOGLE_APPLICATION_CREDENTIALS`, or the
/// metadata server). One store handle is built per bucket on first use.
pub struct GcsStorage {
    builder: GoogleCloudStorageBuilder,
    buckets: BucketStores,
}

impl GcsStorage {
    /// Create a new GcsStorage instance
    ///
    /// # Arguments
    /// * `request_timeout` - Timeout applied by the HTTP client to each storage call
    /// * `bucket_cache_size` - Maximum number of bucket handles kept alive
    pub fn new(request_timeout: Duration, bucket_cache_size: usize) -> Self {
        let builder = GoogleCloudStorageBuilder::from_env()
            .with_client_options(ClientOptions::new().with_timeout(request_timeout));
        Self::with_builder(builder, bucket_cache_size)
    }

    /// Create from a preconfigured builder; the bucket name is filled in per request.
    pub fn with_builder(builder: GoogleCloudStorageBuilder, bucket_cache_size: usize) -> Self {
        Self {
            builder,
            buckets: BucketStores::new(bucket_cache_size),
        }
    }
}

#[async_trait]
impl Storage for GcsStorage {
    async fn head(&self, location: &Location) -> StorageResult<ObjectInfo> {
        let store = self
            .buckets
            .resolve(&location.container, |bucket| {
                let store = self.builder.clone().with_bucket_name(bucket).build()?;
                Ok(Arc::new(store) as Arc<dyn ObjectStore>)
            })
            .await?;

        head_object(&store, location, StorageBackend::Gcs).await
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Gcs
    }
}
