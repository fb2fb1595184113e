use std::sync::atomic::{AtomicU64, Ordering};

/// A multipart/form-data request body (RFC 7578) assembled from form fields.
///
/// The boundary is unique within the process, so concurrent submissions never
/// share one.
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new(fields: &[(String, String)]) -> Self {
        let boundary = fresh_boundary();
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    escape_field_name(name)
                )
                .as_bytes(),
            );
            body.extend_from_slice(value.as_bytes());
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        Self { boundary, body }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

fn fresh_boundary() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let serial = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("----pagelift-{:08x}-{serial:016x}", std::process::id())
}

/// Field-name escaping per the form-data serialization rules: quotes and
/// line breaks are percent-encoded so the name cannot break the header.
fn escape_field_name(name: &str) -> String {
    name.replace('\r', "%0D")
        .replace('\n', "%0A")
        .replace('"', "%22")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn body_carries_each_field_between_boundaries() {
        let form = MultipartForm::new(&fields(&[("name", "Ada"), ("message", "hi there")]));
        let text = String::from_utf8(form.body().to_vec()).expect("ascii fields");
        let boundary = form.boundary();

        let expected = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nAda\r\n\
             --{boundary}\r\nContent-Disposition: form-data; name=\"message\"\r\n\r\nhi there\r\n\
             --{boundary}--\r\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_forms_still_close_the_body() {
        let form = MultipartForm::new(&[]);
        let text = String::from_utf8(form.body().to_vec()).unwrap();
        assert_eq!(text, format!("--{}--\r\n", form.boundary()));
    }

    #[test]
    fn boundaries_are_unique_per_form() {
        let a = MultipartForm::new(&[]);
        let b = MultipartForm::new(&[]);
        assert_ne!(a.boundary(), b.boundary());
    }

    #[test]
    fn hostile_field_names_cannot_escape_the_header() {
        let form = MultipartForm::new(&fields(&[("a\"\r\nb", "x")]));
        let text = String::from_utf8(form.body().to_vec()).unwrap();
        assert!(text.contains("name=\"a%22%0D%0Ab\""));
    }

    #[test]
    fn content_type_names_the_boundary() {
        let form = MultipartForm::new(&[]);
        assert_eq!(
            form.content_type(),
            format!("multipart/form-data; boundary={}", form.boundary())
        );
    }

    #[test]
    fn values_keep_their_bytes_verbatim() {
        let form = MultipartForm::new(&fields(&[("msg", "line one\nline two — ü")]));
        let text = String::from_utf8(form.body().to_vec()).unwrap();
        assert!(text.contains("line one\nline two — ü"));
    }
}
