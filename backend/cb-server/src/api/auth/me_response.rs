use crate::UserDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserDto,
}
