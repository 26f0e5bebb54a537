//! Cipher stream configuration: raw options and their validated,
//! resolved form.
//!
//! A caller assembles a [`CipherOptions`] value, then resolves it against
//! a concrete [`BlockCipher`] to obtain a [`CipherConfig`]. Resolution
//! validates every option up front and derives the key schedules exactly
//! once; engines minted from the config (and from its opposite-direction
//! twin) share those schedules read-only.

use std::fmt;
use std::sync::Arc;

use blockflow_types::{CipherError, Direction, Mode};
use zeroize::Zeroize;

use crate::modes::engine::ModeEngine;
use crate::provider::BlockCipher;

/// Raw, caller-assembled stream options.
///
/// The raw key is zeroized when the value is consumed or dropped.
#[derive(Default)]
pub struct CipherOptions {
    mode: Option<Mode>,
    direction: Option<Direction>,
    key: Option<Vec<u8>>,
    iv: Option<Vec<u8>>,
    shift_width: Option<usize>,
}

impl fmt::Debug for CipherOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherOptions")
            .field("mode", &self.mode)
            .field("direction", &self.direction)
            .field(
                "key",
                &self.key.as_ref().map(|k| format!("[{} bytes]", k.len())),
            )
            .field("iv", &self.iv)
            .field("shift_width", &self.shift_width)
            .finish()
    }
}

impl Drop for CipherOptions {
    fn drop(&mut self) {
        if let Some(key) = self.key.as_mut() {
            key.zeroize();
        }
    }
}

impl CipherOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn key(mut self, key: &[u8]) -> Self {
        if let Some(old) = self.key.as_mut() {
            old.zeroize();
        }
        self.key = Some(key.to_vec());
        self
    }

    pub fn iv(mut self, iv: &[u8]) -> Self {
        self.iv = Some(iv.to_vec());
        self
    }

    pub fn shift_width(mut self, width: usize) -> Self {
        self.shift_width = Some(width);
        self
    }

    /// Validate against `cipher` and derive the key schedules.
    ///
    /// Validation is fail-fast; the first broken option is reported. ECB
    /// and CBC derive both the encryption and the decryption schedule
    /// here, so the config can mint engines for either direction without
    /// keeping the raw key around. CFB and OFB only ever run the block
    /// primitive forward and derive the encryption schedule alone.
    ///
    /// An IV supplied for ECB and a shift width supplied for ECB/CBC are
    /// meaningless there and ignored.
    pub fn resolve<C: BlockCipher>(mut self, cipher: C) -> Result<CipherConfig<C>, CipherError> {
        let direction = self.direction.ok_or(CipherError::MissingDirection)?;
        let mode = self.mode.ok_or(CipherError::MissingMode)?;

        let key_len = match self.key.as_ref() {
            Some(key) => key.len(),
            None => return Err(CipherError::MissingKey),
        };
        let min = cipher.min_key_size();
        let max = cipher.max_key_size();
        if key_len < min || max.is_some_and(|m| key_len > m) {
            return Err(CipherError::InvalidKeyLength {
                min,
                max,
                got: key_len,
            });
        }

        let block_size = cipher.block_size();
        let iv = if mode.requires_iv() {
            let iv = self.iv.take().ok_or(CipherError::IvRequired { mode })?;
            if iv.len() != block_size {
                return Err(CipherError::InvalidIvLength {
                    expected: block_size,
                    got: iv.len(),
                });
            }
            iv
        } else {
            Vec::new()
        };

        let shift_width = if mode.requires_shift_width() {
            let width = self
                .shift_width
                .ok_or(CipherError::ShiftWidthRequired { mode })?;
            if width == 0 || width > block_size || block_size % width != 0 {
                return Err(CipherError::InvalidShiftWidth {
                    block_size,
                    got: width,
                });
            }
            width
        } else {
            block_size
        };

        let mut key = self.key.take().ok_or(CipherError::MissingKey)?;
        let schedules = match mode {
            Mode::Cfb | Mode::Ofb => cipher
                .derive_schedule(&key, Direction::Encrypt)
                .map(|enc| Schedules::Forward(Arc::new(enc))),
            Mode::Ecb | Mode::Cbc => {
                cipher.derive_schedule(&key, Direction::Encrypt).and_then(|enc| {
                    cipher
                        .derive_schedule(&key, Direction::Decrypt)
                        .map(|dec| Schedules::PerDirection {
                            encrypt: Arc::new(enc),
                            decrypt: Arc::new(dec),
                        })
                })
            }
        };
        key.zeroize();

        Ok(CipherConfig {
            cipher: Arc::new(cipher),
            mode,
            direction,
            iv,
            shift_width,
            schedules: schedules?,
        })
    }
}

/// The memoized key schedules of one resolved configuration.
pub(crate) enum Schedules<C: BlockCipher> {
    /// CFB/OFB: the primitive only ever runs forward.
    Forward(Arc<C::Schedule>),
    /// ECB/CBC: one schedule per direction.
    PerDirection {
        encrypt: Arc<C::Schedule>,
        decrypt: Arc<C::Schedule>,
    },
}

impl<C: BlockCipher> Schedules<C> {
    fn for_direction(&self, direction: Direction) -> &Arc<C::Schedule> {
        match self {
            Schedules::Forward(enc) => enc,
            Schedules::PerDirection { encrypt, decrypt } => match direction {
                Direction::Encrypt => encrypt,
                Direction::Decrypt => decrypt,
            },
        }
    }
}

impl<C: BlockCipher> Clone for Schedules<C> {
    fn clone(&self) -> Self {
        match self {
            Schedules::Forward(enc) => Schedules::Forward(Arc::clone(enc)),
            Schedules::PerDirection { encrypt, decrypt } => Schedules::PerDirection {
                encrypt: Arc::clone(encrypt),
                decrypt: Arc::clone(decrypt),
            },
        }
    }
}

/// A validated stream configuration with memoized key schedules.
pub struct CipherConfig<C: BlockCipher> {
    pub(crate) cipher: Arc<C>,
    pub(crate) mode: Mode,
    pub(crate) direction: Direction,
    pub(crate) iv: Vec<u8>,
    pub(crate) shift_width: usize,
    pub(crate) schedules: Schedules<C>,
}

impl<C: BlockCipher> fmt::Debug for CipherConfig<C> {
    // The cipher and its schedules are left out: schedules are key
    // material, and neither type is required to be Debug.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherConfig")
            .field("mode", &self.mode)
            .field("direction", &self.direction)
            .field("iv", &self.iv)
            .field("shift_width", &self.shift_width)
            .finish()
    }
}

impl<C: BlockCipher> Clone for CipherConfig<C> {
    fn clone(&self) -> Self {
        CipherConfig {
            cipher: Arc::clone(&self.cipher),
            mode: self.mode,
            direction: self.direction,
            iv: self.iv.clone(),
            shift_width: self.shift_width,
            schedules: self.schedules.clone(),
        }
    }
}

impl<C: BlockCipher> CipherConfig<C> {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    /// The processing unit size: the shift width for CFB/OFB, the block
    /// size otherwise.
    pub fn unit_size(&self) -> usize {
        self.shift_width
    }

    /// Build a mode engine for this config's direction.
    pub fn engine(&self) -> ModeEngine<C> {
        ModeEngine::from_config(self)
    }

    /// A config for `direction` sharing this config's derived schedules.
    ///
    /// This is how the read side of an attached stream reuses the write
    /// side's key derivation: resolve once, then mint the opposite
    /// direction from the same config.
    pub fn with_direction(&self, direction: Direction) -> CipherConfig<C> {
        let mut config = self.clone();
        config.direction = direction;
        config
    }

    /// The schedule the engine for this config's direction must use.
    ///
    /// CFB and OFB always hand back the encryption schedule; ECB and CBC
    /// pick by direction.
    pub(crate) fn active_schedule(&self) -> Arc<C::Schedule> {
        Arc::clone(self.schedules.for_direction(self.direction))
    }
}
