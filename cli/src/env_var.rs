use serde::Deserialize;

#[derive(Deserialize)]
pub struct EnvVar {
    // blockchain settings
    pub rpc_url: String,
}
