use reqwest::Client;
use serde_json::{Value, json};

const API: &str = "http://localhost:5050";

#[tokio::main]
async fn main() {
    let client = Client::new();

    let check: Value = client
        .post(format!("{API}/check"))
        .json(&json!({ "user": "tester", "number": 153 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    println!("check 153: {check}");

    let range: Value = client
        .post(format!("{API}/range"))
        .json(&json!({ "user": "tester", "min": 100, "max": 999 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    println!("range 100-999: {range}");

    let attempts: Value = client
        .get(format!("{API}/attempts"))
        .query(&[("user", "tester"), ("page", "1")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    println!("attempts: {attempts}");
}
