use assert_cmd::Command;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Canned bill-service backend driven over real HTTP, so the binary is
/// exercised end to end with its production client.
#[derive(Default)]
pub struct Backend {
    pub groups: Vec<Group>,
    pub bills: HashMap<String, Vec<StoredBill>>,
    pub summary: Value,
    pub fail_bills: bool,
    pub force_unauthorized: bool,
    next_group: usize,
    next_bill: usize,
}

pub struct Group {
    pub group_id: String,
    pub name: String,
    pub members: Vec<Value>,
}

pub struct StoredBill {
    pub bill_id: String,
    pub description: String,
    pub amount: f64,
    pub due_date: String,
    pub created_by: String,
    pub shares: Vec<Value>,
}

impl Backend {
    pub fn add_group(&mut self, name: &str, member_ids: &[&str]) -> String {
        self.next_group += 1;
        let group_id = format!("g{}", self.next_group);
        self.groups.push(Group {
            group_id: group_id.clone(),
            name: name.to_string(),
            members: member_ids
                .iter()
                .enumerate()
                .map(|(i, id)| {
                    json!({
                        "userId": id,
                        "name": id,
                        "email": format!("{id}@example.com"),
                        "role": if i == 0 { "owner" } else { "member" },
                    })
                })
                .collect(),
        });
        group_id
    }

    pub fn add_bill(
        &mut self,
        group_id: &str,
        description: &str,
        amount: f64,
        created_by: &str,
        shares: Vec<Value>,
    ) -> String {
        self.next_bill += 1;
        let bill_id = format!("b{}", self.next_bill);
        self.bills.entry(group_id.to_string()).or_default().push(StoredBill {
            bill_id: bill_id.clone(),
            description: description.to_string(),
            amount,
            due_date: "2025-12-01".to_string(),
            created_by: created_by.to_string(),
            shares,
        });
        bill_id
    }
}

pub struct MockApi {
    pub base_url: String,
    pub backend: Arc<Mutex<Backend>>,
}

impl MockApi {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock api");
        let addr = listener.local_addr().expect("mock api addr");
        let backend = Arc::new(Mutex::new(Backend::default()));

        let serve = Arc::clone(&backend);
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                handle_connection(stream, &serve);
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            backend,
        }
    }
}

fn handle_connection(mut stream: TcpStream, backend: &Arc<Mutex<Backend>>) {
    let Ok(reader_stream) = stream.try_clone() else {
        return;
    };
    let mut reader = BufReader::new(reader_stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).is_err() || line == "\r\n" || line.is_empty() {
            break;
        }
        if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }
    let mut body_bytes = vec![0u8; content_length];
    if content_length > 0 && reader.read_exact(&mut body_bytes).is_err() {
        return;
    }
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    let (status, response) = route(&method, &path, body, backend);
    respond(&mut stream, status, &response);
}

fn route(method: &str, path: &str, body: Value, backend: &Arc<Mutex<Backend>>) -> (u16, Value) {
    let mut state = backend.lock().expect("backend lock");
    if state.force_unauthorized {
        return (401, json!({ "message": "unauthorized" }));
    }
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", ["groups"]) => {
            let groups: Vec<Value> = state
                .groups
                .iter()
                .map(|g| json!({ "groupId": g.group_id, "name": g.name }))
                .collect();
            (200, Value::Array(groups))
        }
        ("POST", ["groups"]) => {
            let name = body["name"].as_str().unwrap_or("Household").to_string();
            let group_id = state.add_group(&name, &["u1"]);
            (200, json!({ "groupId": group_id }))
        }
        ("GET", ["groups", gid]) => match state.groups.iter().find(|g| g.group_id == *gid) {
            Some(g) => (
                200,
                json!({ "groupId": g.group_id, "name": g.name, "members": g.members }),
            ),
            None => (404, json!({ "message": "no such group" })),
        },
        ("POST", ["groups", gid, "join"]) => {
            let gid = gid.to_string();
            match state.groups.iter_mut().find(|g| g.group_id == gid) {
                Some(g) => {
                    g.members.push(json!({
                        "userId": body["userId"],
                        "name": body["name"],
                        "email": body["email"],
                        "role": "member",
                    }));
                    (200, json!({}))
                }
                None => (404, json!({ "message": "no such group" })),
            }
        }
        ("GET", ["groups", gid, "bills"]) => {
            if state.fail_bills {
                return (500, json!({ "message": "bills unavailable" }));
            }
            let bills: Vec<Value> = state
                .bills
                .get(*gid)
                .map(|bills| bills.iter().map(|b| bill_view(b, "u1")).collect())
                .unwrap_or_default();
            (200, Value::Array(bills))
        }
        ("POST", ["groups", gid, "bills"]) => {
            let description = body["description"].as_str().unwrap_or_default().to_string();
            let amount = body["amount"].as_f64().unwrap_or(0.0);
            let shares = body["shares"].as_array().cloned().unwrap_or_default();
            let bill_id = state.add_bill(gid, &description, amount, "u1", shares);
            (
                200,
                json!({ "billId": bill_id, "description": description, "amount": amount }),
            )
        }
        ("PATCH", ["groups", gid, "bills", bid, "shares", uid]) => {
            let found = state
                .bills
                .get_mut(*gid)
                .and_then(|bills| bills.iter_mut().find(|b| b.bill_id == *bid));
            match found {
                Some(bill) => {
                    for share in bill.shares.iter_mut() {
                        if share["userId"] == *uid {
                            share["status"] = json!("paid");
                        }
                    }
                    (200, json!({}))
                }
                None => (404, json!({ "message": "no such bill" })),
            }
        }
        ("GET", ["me", "summary"]) => {
            if state.summary.is_null() {
                (200, json!({ "totalowed": 0, "bills": [] }))
            } else {
                (200, state.summary.clone())
            }
        }
        _ => (404, json!({ "message": "no such route" })),
    }
}

/// The list-bills view reports `status` as the requesting user's own share
/// status on that bill.
fn bill_view(bill: &StoredBill, user_id: &str) -> Value {
    let status = bill
        .shares
        .iter()
        .find(|s| s["userId"] == user_id)
        .and_then(|s| s["status"].as_str())
        .unwrap_or("due")
        .to_string();
    json!({
        "billId": bill.bill_id,
        "description": bill.description,
        "amount": bill.amount,
        "dueDate": bill.due_date,
        "createdBy": bill.created_by,
        "status": status,
    })
}

fn respond(stream: &mut TcpStream, status: u16, body: &Value) {
    let rendered = body.to_string();
    let reason = match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        _ => "Error",
    };
    let _ = write!(
        stream,
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{rendered}",
        rendered.len()
    );
    let _ = stream.flush();
}

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub api: MockApi,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        std::fs::create_dir_all(&home).expect("create isolated home");

        let api = MockApi::start();
        let config_dir = home.join(".config/fairshare");
        std::fs::create_dir_all(&config_dir).expect("create config dir");
        std::fs::write(
            config_dir.join("config.toml"),
            format!(
                "api_base = \"{}\"\n\n[user]\nid = \"u1\"\nemail = \"u1@example.com\"\nname = \"u1\"\n",
                api.base_url
            ),
        )
        .expect("write config");

        Self {
            _tmp: tmp,
            home,
            api,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("fairshare").expect("binary under test");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_fail(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json error output")
    }

    pub fn state_json(&self) -> Value {
        let raw = std::fs::read_to_string(self.home.join(".config/fairshare/state.json"))
            .expect("state file");
        serde_json::from_str(&raw).expect("valid state json")
    }
}
