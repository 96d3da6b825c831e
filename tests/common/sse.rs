use serde::Serialize;

pub fn build_sse_stream<T: Serialize>(chunks: &[T]) -> String {
    build_sse_stream_with_delimiter(chunks, "\n")
}

pub fn build_sse_stream_with_delimiter<T: Serialize>(chunks: &[T], delimiter: &str) -> String {
    let mut sse = String::new();
    for chunk in chunks {
        let json_str = serde_json::to_string(chunk).unwrap();
        sse.push_str(&format!("data: {}{}{}", json_str, delimiter, delimiter));
    }
    sse.push_str(&format!("data: [DONE]{}{}", delimiter, delimiter));
    sse
}
