use crate::remote::{head_object, BucketStores};
use crate::traits::{ObjectInfo, Storage, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use object_store::aws::AmazonS3Builder;
use object_store::{ClientOptions, ObjectStore};
use std::sync::Arc;
use std::time::Duration;
use taskhandler_core::Location;

/// S3 storage implementation
pub struct S3Storage {
    builder: AmazonS3Builder,
    buckets: BucketStores,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    /// * `request_timeout` - Timeout applied by the HTTP client to each storage call
    /// * `bucket_cache_size` - Maximum number of bucket handles kept alive
    pub fn new(
        region: String,
        endpoint_url: Option<String>,
        request_timeout: Duration,
        bucket_cache_size: usize,
    ) -> Self {
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region)
            .with_client_options(ClientOptions::new().with_timeout(request_timeout));

        if let Some(endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder.with_endpoint(endpoint).with_allow_http(allow_http);
        }

        Self {
            builder,
            buckets: BucketStores::new(bucket_cache_size),
        }
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn head(&self, location: &Location) -> StorageResult<ObjectInfo> {
        let store = self
            .buckets
            .resolve(&location.container, |bucket| {
                let store = self.builder.clone().with_bucket_name(bucket).build()?;
                Ok(Arc::new(store) as Arc<dyn ObjectStore>)
            })
            .await?;

        head_object(&store, location, StorageBackend::S3).await
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
