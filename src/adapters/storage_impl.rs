use anyhow::Context;
use aws_sdk_s3::primitives::ByteStream;

use crate::ports::Storage;

/// S3 blob store. Every key is stored under `prefix`, and `list_keys` only
/// lists objects inside it, so the bucket can hold unrelated data.
#[derive(Debug, Clone)]
pub struct StorageImpl {
    pub bucket: String,
    pub prefix: String,
    pub client: aws_sdk_s3::Client,
}

impl StorageImpl {
    pub fn new(bucket: String, prefix: String, client: aws_sdk_s3::Client) -> Self {
        Self {
            bucket,
            prefix,
            client,
        }
    }

    fn object_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl Storage for StorageImpl {
    type Error = anyhow::Error;

    async fn get(&mut self, key: &str) -> Result<Option<String>, Self::Error> {
        let res = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(self.object_key(key))
            .send()
            .await;

        let output = match res {
            Ok(output) => output,
            Err(err) => {
                let err = err.into_service_error();
                if err.is_no_such_key() {
                    return Ok(None);
                }
                return Err(err).context("get object");
            }
        };

        let bytes = output
            .body
            .collect()
            .await
            .context("read object body")?
            .into_bytes();
        let text = String::from_utf8(bytes.to_vec()).context("object is not utf-8")?;

        Ok(Some(text))
    }

    async fn put(&mut self, key: &str, data: String) -> Result<(), Self::Error> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(self.object_key(key))
            .content_type("text/plain; charset=utf-8")
            .body(ByteStream::from(data.into_bytes()))
            .send()
            .await
            .context("put object")?;

        Ok(())
    }

    async fn delete(&mut self, key: &str) -> Result<(), Self::Error> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(self.object_key(key))
            .send()
            .await
            .context("delete object")?;

        Ok(())
    }

    async fn list_keys(&mut self) -> Result<Vec<String>, Self::Error> {
        let mut keys = Vec::new();
        let mut continuation_token = None;

        loop {
            let output = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(&self.prefix)
                .set_continuation_token(continuation_token.take())
                .send()
                .await
                .context("list objects")?;

            keys.extend(
                output
                    .contents()
                    .iter()
                    .filter_map(|object| object.key())
                    .filter_map(|key| key.strip_prefix(self.prefix.as_str()))
                    .map(str::to_owned),
            );

            match output.next_continuation_token() {
                Some(token) => continuation_token = Some(token.to_owned()),
                None => break,
            }
        }

        Ok(keys)
    }
}
