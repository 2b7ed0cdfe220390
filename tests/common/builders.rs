use base64::{Engine as _, engine::general_purpose};
use rideshare_gate::{Gateway, MemoryRideStore, RequestDescriptor, Ride};

pub fn bearer(sub: &str) -> String {
    let payload =
        general_purpose::URL_SAFE_NO_PAD.encode(serde_json::json!({ "sub": sub }).to_string());
    format!("Bearer eyJhbGciOiJub25lIn0.{payload}.sig")
}

pub fn ride(id: &str, owner: &str) -> Ride {
    Ride {
        id: id.into(),
        owner: owner.into(),
        from: "downtown".into(),
        to: "airport".into(),
        when: "2020-01-01T09:00".into(),
    }
}

pub fn gateway_with(rides: &[Ride]) -> Gateway<MemoryRideStore> {
    let store = MemoryRideStore::new();
    for ride in rides {
        store.put(ride.clone());
    }
    Gateway::new(store)
}

#[derive(Default)]
pub struct RequestBuilder {
    method: String,
    ride_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl RequestBuilder {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            ..Self::default()
        }
    }

    pub fn ride_id(mut self, id: &str) -> Self {
        self.ride_id = Some(id.to_string());
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn origin(self, origin: &str) -> Self {
        self.header("Origin", origin)
    }

    pub fn request_method(self, method: &str) -> Self {
        self.header("Access-Control-Request-Method", method)
    }

    pub fn request_headers(self, headers: &str) -> Self {
        self.header("Access-Control-Request-Headers", headers)
    }

    pub fn authorization(self, value: &str) -> Self {
        self.header("Authorization", value)
    }

    pub fn build(self) -> RequestDescriptor {
        let mut request = RequestDescriptor::new(self.method);
        request.ride_id = self.ride_id;
        request.headers = self.headers;
        request
    }
}

pub fn preflight() -> RequestBuilder {
    RequestBuilder::new("OPTIONS")
}

pub fn list() -> RequestBuilder {
    RequestBuilder::new("GET")
}

pub fn delete(id: &str) -> RequestBuilder {
    RequestBuilder::new("DELETE").ride_id(id)
}
