use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

/// Two-entity catalog page in the shape the AboutYou API returns. Fields the
/// decoder does not model are present to prove they get ignored.
pub const CATALOG_FIXTURE: &str = r#"{
  "pagination": { "current": 1, "total": 2, "perPage": 100 },
  "entities": [
    {
      "id": 101,
      "isActive": true,
      "attributes": {
        "name": {
          "key": "name",
          "label": "Name",
          "values": { "label": "Slim Fit Jeans" }
        },
        "brand": {
          "key": "brand",
          "label": "Brand",
          "values": { "label": "Levi's" }
        },
        "colorDetail": {
          "key": "colorDetail",
          "label": "Colour",
          "values": [
            { "id": 38932, "label": "black" },
            { "id": 38935, "label": "white" }
          ]
        }
      },
      "advancedAttributes": {
        "siblings": {
          "key": "siblings",
          "values": [
            {
              "fieldSet": [
                [
                  {
                    "id": 1014,
                    "isSoldOut": true,
                    "colorDetail": [ { "id": 38941, "label": "olive" } ]
                  },
                  {
                    "id": 1015,
                    "isSoldOut": false,
                    "colorDetail": [ { "id": 38919, "label": "red" } ]
                  }
                ]
              ]
            }
          ]
        }
      },
      "priceRange": {
        "min": { "currencyCode": "EUR", "withTax": 7990, "withoutTax": 6714 },
        "max": { "currencyCode": "EUR", "withTax": 7990, "withoutTax": 6714 }
      },
      "variants": [],
      "images": [ { "hash": "images/0a1" } ]
    },
    {
      "id": 202,
      "isActive": true,
      "attributes": {
        "name": {
          "key": "name",
          "label": "Name",
          "values": { "label": "Don't Stop Hoodie" }
        },
        "brand": {
          "key": "brand",
          "label": "Brand",
          "values": { "label": "H&M" }
        },
        "colorDetail": {
          "key": "colorDetail",
          "label": "Colour",
          "values": [ { "id": 38920, "label": "blue" } ]
        }
      },
      "advancedAttributes": {
        "materialCompositionTextile": {
          "key": "materialCompositionTextile",
          "values": []
        }
      },
      "priceRange": {
        "min": { "currencyCode": "EUR", "withTax": 2495, "withoutTax": 2097 },
        "max": { "currencyCode": "EUR", "withTax": 2495, "withoutTax": 2097 }
      },
      "variants": [],
      "images": []
    }
  ]
}"#;

/// Serves exactly one canned HTTP response on a random local port. Returns the
/// URL to request plus a handle resolving to the raw request head, so callers
/// can assert on what went over the wire.
pub fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let read = stream.read(&mut buf).unwrap_or(0);
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
            // GET requests carry no body; the head ends the request
            if request.windows(4).any(|chunk| chunk == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/v1/products"), handle)
}
