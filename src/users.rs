// users.rs
// Data contracts for the account-management endpoints. These are pure
// request/response shapes; no behavior is attached to them here. `status`,
// `role` and `gender` are small integer codes, and `point` is non-negative
// by convention only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserBase {
    pub user_id: String,
    pub user_name: String,
    pub password: String,
    pub avatar: Option<String>,
    pub join_date: String,
    pub full_name: String,
    pub birth_date: Option<String>,
    pub gender: i32,
    pub id_card: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub status: i32,
    pub role: i32,
    pub point: i32,
}

/// `UserBase` without the server-assigned fields, plus the password
/// confirmation the signup form collects.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddEmployee {
    pub user_name: String,
    pub password: String,
    pub confirm_password: String,
    pub avatar: Option<String>,
    pub full_name: String,
    pub birth_date: Option<String>,
    pub gender: i32,
    pub id_card: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub user_name: String,
    pub avatar: String,
    pub join_date: String,
    pub full_name: String,
    pub birth_date: Option<String>,
    pub gender: i32,
    pub id_card: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub status: i32,
    pub role: i32,
    pub point: i32,
}

/// Field names on this one are snake_case on the wire.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdatePasswordDto {
    pub email: String,
    pub new_password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub point: i32,
    pub avatar_url: Option<String>,
    pub id_card: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_wire_names_are_camel_case() {
        let json = r#"{
            "userId": "u-1",
            "userName": "ash",
            "avatar": "https://img.example/ash.png",
            "joinDate": "2024-01-15",
            "fullName": "Ash Ketchum",
            "birthDate": null,
            "gender": 1,
            "idCard": "123456789",
            "email": "ash@example.com",
            "phoneNumber": "555-0100",
            "address": "Pallet Town",
            "status": 1,
            "role": 2,
            "point": 150
        }"#;

        let user: UserResponse = serde_json::from_str(json).expect("valid user json");
        assert_eq!(user.user_name, "ash");
        assert_eq!(user.birth_date, None);
        assert_eq!(user.point, 150);

        let value = serde_json::to_value(&user).expect("serializable");
        assert!(value.get("userId").is_some());
        assert!(value.get("user_id").is_none());
    }

    #[test]
    fn test_update_password_dto_keeps_snake_case() {
        let dto = UpdatePasswordDto {
            email: "ash@example.com".to_string(),
            new_password: "pikapika".to_string(),
        };

        let value = serde_json::to_value(&dto).expect("serializable");
        assert!(value.get("new_password").is_some());
        assert!(value.get("newPassword").is_none());
    }

    #[test]
    fn test_add_employee_round_trip() {
        let json = r#"{
            "userName": "misty",
            "password": "starmie1",
            "confirmPassword": "starmie1",
            "avatar": null,
            "fullName": "Misty Waterflower",
            "birthDate": "1999-04-01",
            "gender": 2,
            "idCard": "987654321",
            "email": "misty@example.com",
            "phoneNumber": "555-0101",
            "address": "Cerulean City"
        }"#;

        let employee: AddEmployee = serde_json::from_str(json).expect("valid employee json");
        assert_eq!(employee.password, employee.confirm_password);
        assert_eq!(employee.avatar, None);
    }
}
