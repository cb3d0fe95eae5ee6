use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::kinds::{
    class_of_props, KindClass, KindId, KindProps, KIND_COUNT, KIND_DATA, KIND_KEYS, KIND_NAMES,
    K_EMPTY,
};

/// Runtime kind table: the compiled-in defaults, or a JSON bundle loaded by
/// the shell. Shared read-only by the whole world.
#[derive(Clone, Debug)]
pub struct KindRegistry {
    kinds: Vec<KindProps>,
    class_by_id: Vec<KindClass>,
    kind_key_to_id: HashMap<String, KindId>,
    manifest: Vec<KindManifestEntry>,
}

impl KindRegistry {
    pub fn from_generated() -> Self {
        let kinds = KIND_DATA.to_vec();

        let mut kind_key_to_id = HashMap::new();
        for (idx, key) in KIND_KEYS.iter().enumerate() {
            kind_key_to_id.insert((*key).to_string(), idx as KindId);
        }

        let mut class_by_id = Vec::with_capacity(KIND_COUNT);
        let mut manifest = Vec::with_capacity(KIND_COUNT);
        for (idx, props) in kinds.iter().enumerate() {
            class_by_id.push(if idx == K_EMPTY as usize {
                KindClass::None
            } else {
                class_of_props(props)
            });
            manifest.push(KindManifestEntry {
                id: idx as KindId,
                key: KIND_KEYS[idx].to_string(),
                name: KIND_NAMES[idx].to_string(),
                color: props.color,
                hidden: idx == K_EMPTY as usize,
            });
        }

        Self {
            kinds,
            class_by_id,
            kind_key_to_id,
            manifest,
        }
    }

    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    pub fn kind_count(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_valid_kind_id(&self, id: KindId) -> bool {
        (id as usize) < self.kinds.len()
    }

    pub fn props(&self, id: KindId) -> Option<&KindProps> {
        self.kinds.get(id as usize)
    }

    pub fn class(&self, id: KindId) -> KindClass {
        self.class_by_id
            .get(id as usize)
            .copied()
            .unwrap_or(KindClass::None)
    }

    pub fn id_by_key(&self, key: &str) -> Option<KindId> {
        self.kind_key_to_id.get(key).copied()
    }

    /// Palette manifest for the shell UI
    pub fn manifest_json(&self) -> String {
        let out = KindManifest {
            format_version: 1,
            kinds: &self.manifest,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    /// Base color nudged by a small per-cell seed so painted regions are not
    /// a flat fill
    pub fn color_with_variation(&self, id: KindId, seed: u8) -> Option<u32> {
        let base = self.props(id)?.color;
        let i = (seed & 31) as i32;
        let variation = (i - 16) * 2;

        let a = (base >> 24) & 0xFF;
        let b = (((base >> 16) & 0xFF) as i32 + variation).clamp(0, 255) as u32;
        let g = (((base >> 8) & 0xFF) as i32 + variation).clamp(0, 255) as u32;
        let r = ((base & 0xFF) as i32 + variation).clamp(0, 255) as u32;

        Some((a << 24) | (b << 16) | (g << 8) | r)
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, String> {
        let mut max_id: u16 = 0;
        for k in bundle.kinds.iter() {
            if k.id > max_id {
                max_id = k.id;
            }
        }

        if max_id > (u8::MAX as u16) {
            return Err(format!("too many kinds for u8 ids: max_id={}", max_id));
        }

        let len = (max_id as usize) + 1;
        let mut props_by_id: Vec<Option<KindProps>> = vec![None; len];
        let mut manifest_by_id: Vec<Option<KindManifestEntry>> = vec![None; len];
        let mut kind_key_to_id = HashMap::new();

        for k in bundle.kinds.into_iter() {
            let id = k.id as KindId;
            let idx = id as usize;

            if props_by_id[idx].is_some() {
                return Err(format!("duplicate kind id: {}", idx));
            }

            let props = KindProps {
                color: k.color,
                uses_gravity: k.uses_gravity,
                slip: k.slip,
                life_span: k.life_span,
                flammable: k.flammable,
                extinguishes: k.extinguishes,
                explosion_radius: k.explosion_radius,
                blast_resistance: k.blast_resistance,
            };

            // Decay and gravity-fall are mutually exclusive update modes.
            if props.life_span > 0 && props.uses_gravity {
                return Err(format!(
                    "kind {} ({}) both decays and uses gravity",
                    idx, &k.key
                ));
            }

            kind_key_to_id.insert(k.key.clone(), id);

            manifest_by_id[idx] = Some(KindManifestEntry {
                id,
                key: k.key,
                name: k.name.unwrap_or_default(),
                color: props.color,
                hidden: k.hidden,
            });
            props_by_id[idx] = Some(props);
        }

        if props_by_id.first().map(|v| v.is_none()).unwrap_or(true) {
            return Err("missing kind id 0 (empty)".to_string());
        }

        let mut kinds = Vec::with_capacity(len);
        let mut class_by_id = Vec::with_capacity(len);
        let mut manifest = Vec::with_capacity(len);

        for idx in 0..len {
            let props = props_by_id[idx].ok_or_else(|| format!("missing kind id {}", idx))?;
            let meta = manifest_by_id[idx]
                .take()
                .ok_or_else(|| format!("missing kind manifest for id {}", idx))?;

            class_by_id.push(if idx == K_EMPTY as usize {
                KindClass::None
            } else {
                class_of_props(&props)
            });
            kinds.push(props);
            manifest.push(meta);
        }

        Ok(Self {
            kinds,
            class_by_id,
            kind_key_to_id,
            manifest,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KindManifest<'a> {
    format_version: u32,
    kinds: &'a [KindManifestEntry],
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindManifestEntry {
    id: KindId,
    key: String,
    name: String,
    color: u32,
    hidden: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    kinds: Vec<BundleKind>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleKind {
    id: u16,
    key: String,
    #[serde(default)]
    name: Option<String>,
    color: u32,
    uses_gravity: bool,
    #[serde(default)]
    slip: i32,
    #[serde(default)]
    life_span: u16,
    #[serde(default)]
    flammable: bool,
    #[serde(default)]
    extinguishes: bool,
    #[serde(default)]
    explosion_radius: u8,
    #[serde(default)]
    blast_resistance: u8,
    #[serde(default)]
    hidden: bool,
}
