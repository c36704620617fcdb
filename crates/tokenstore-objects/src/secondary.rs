//! Secondary object kinds.
//!
//! These hold key material outside the searchable store: the session key
//! used for auth-material transport, the wrapping key, and the seal object
//! carrying the security-officer and user authorization material. None of
//! them has attributes or mechanisms; they are built whole and released
//! whole.

use std::fmt;

use zeroize::Zeroizing;

/// Key material for a session-level key.
pub struct SessionObject {
    private: Vec<u8>,
    public: Vec<u8>,
    objauth: Vec<u8>,
    authraw: Zeroizing<Vec<u8>>,
}

impl SessionObject {
    pub fn new(
        private: Vec<u8>,
        public: Vec<u8>,
        objauth: Vec<u8>,
        authraw: Zeroizing<Vec<u8>>,
    ) -> Self {
        Self {
            private,
            public,
            objauth,
            authraw,
        }
    }

    pub fn private_blob(&self) -> &[u8] {
        &self.private
    }

    pub fn public_blob(&self) -> &[u8] {
        &self.public
    }

    /// The wrapped object auth.
    pub fn objauth(&self) -> &[u8] {
        &self.objauth
    }

    /// The raw (unwrapped) auth value. Wiped on release.
    pub fn authraw(&self) -> &[u8] {
        &self.authraw
    }

    /// Release all material.
    pub fn free(self) {}
}

impl fmt::Debug for SessionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionObject")
            .field("private", &self.private.len())
            .field("public", &self.public.len())
            .field("objauth", &self.objauth.len())
            .field("authraw", &"<redacted>")
            .finish()
    }
}

/// Key material for the token's wrapping key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappingObject {
    private: Vec<u8>,
    public: Vec<u8>,
    objauth: Vec<u8>,
}

impl WrappingObject {
    pub fn new(private: Vec<u8>, public: Vec<u8>, objauth: Vec<u8>) -> Self {
        Self {
            private,
            public,
            objauth,
        }
    }

    pub fn private_blob(&self) -> &[u8] {
        &self.private
    }

    pub fn public_blob(&self) -> &[u8] {
        &self.public
    }

    pub fn objauth(&self) -> &[u8] {
        &self.objauth
    }

    /// Release all material.
    pub fn free(self) {}
}

/// Sealed authorization material for the security officer and the user.
///
/// Each role has its own salt and its own sealed public/private pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealObject {
    so_auth_salt: Vec<u8>,
    so_private: Vec<u8>,
    so_public: Vec<u8>,
    user_auth_salt: Vec<u8>,
    user_private: Vec<u8>,
    user_public: Vec<u8>,
}

/// One role's share of a [`SealObject`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedAuth {
    pub auth_salt: Vec<u8>,
    pub private: Vec<u8>,
    pub public: Vec<u8>,
}

impl SealObject {
    pub fn new(so: SealedAuth, user: SealedAuth) -> Self {
        Self {
            so_auth_salt: so.auth_salt,
            so_private: so.private,
            so_public: so.public,
            user_auth_salt: user.auth_salt,
            user_private: user.private,
            user_public: user.public,
        }
    }

    pub fn so_auth_salt(&self) -> &[u8] {
        &self.so_auth_salt
    }

    pub fn so_private(&self) -> &[u8] {
        &self.so_private
    }

    pub fn so_public(&self) -> &[u8] {
        &self.so_public
    }

    pub fn user_auth_salt(&self) -> &[u8] {
        &self.user_auth_salt
    }

    pub fn user_private(&self) -> &[u8] {
        &self.user_private
    }

    pub fn user_public(&self) -> &[u8] {
        &self.user_public
    }

    /// Release all material.
    pub fn free(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_object_debug_redacts_auth() {
        let sobj = SessionObject::new(
            vec![1; 4],
            vec![2; 8],
            vec![3; 2],
            Zeroizing::new(b"hunter2".to_vec()),
        );
        assert_eq!(sobj.authraw(), b"hunter2");

        let debug = format!("{:?}", sobj);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("hunter2"));
        sobj.free();
    }

    #[test]
    fn test_seal_object_roles_are_separate() {
        let seal = SealObject::new(
            SealedAuth {
                auth_salt: b"so-salt".to_vec(),
                private: b"so-priv".to_vec(),
                public: b"so-pub".to_vec(),
            },
            SealedAuth {
                auth_salt: b"user-salt".to_vec(),
                private: b"user-priv".to_vec(),
                public: b"user-pub".to_vec(),
            },
        );

        assert_eq!(seal.so_auth_salt(), b"so-salt");
        assert_eq!(seal.so_private(), b"so-priv");
        assert_eq!(seal.so_public(), b"so-pub");
        assert_eq!(seal.user_auth_salt(), b"user-salt");
        assert_eq!(seal.user_private(), b"user-priv");
        assert_eq!(seal.user_public(), b"user-pub");
        seal.free();
    }

    #[test]
    fn test_wrapping_object() {
        let wobj = WrappingObject::new(b"priv".to_vec(), b"pub".to_vec(), b"auth".to_vec());
        assert_eq!(wobj.private_blob(), b"priv");
        assert_eq!(wobj.public_blob(), b"pub");
        assert_eq!(wobj.objauth(), b"auth");
        wobj.free();
    }
}
