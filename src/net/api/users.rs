//! User profile and activity endpoints.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::error::{ApiResult, require_id};
use crate::net::http::{Http, MultipartForm};
use crate::net::types::{ActivityRecord, UserAccount};

fn user_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}")
}

/// Editable user profile fields; the avatar travels as a multipart file.
#[derive(Clone, Debug, Default)]
pub struct UserProfileDraft {
    pub name: Option<String>,
    pub city: Option<String>,
}

impl UserProfileDraft {
    fn into_form(self) -> MultipartForm {
        MultipartForm::new()
            .text_opt("name", self.name.as_deref())
            .text_opt("city", self.city.as_deref())
    }
}

#[derive(Clone)]
pub struct UsersClient {
    http: Http,
}

impl UsersClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Another member's public profile.
    pub async fn get(&self, user_id: &str) -> ApiResult<UserAccount> {
        let user_id = require_id("userId", user_id)?;
        self.http.get(&user_endpoint(&user_id)).await
    }

    /// Update the calling user's profile.
    pub async fn update_profile(
        &self,
        draft: UserProfileDraft,
        #[cfg(feature = "hydrate")] avatar: Option<web_sys::File>,
    ) -> ApiResult<UserAccount> {
        #[allow(unused_mut)]
        let mut form = draft.into_form();
        #[cfg(feature = "hydrate")]
        if let Some(avatar) = avatar {
            form = form.file("avatar", avatar);
        }
        self.http.put_multipart_auth("/api/users/profile", form).await
    }

    /// The calling user's attendance and volunteering history.
    pub async fn my_activity(&self) -> ApiResult<Vec<ActivityRecord>> {
        self.http.get_auth("/api/users/me/activity").await
    }
}
