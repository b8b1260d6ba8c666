//! The `f8-*` Maven profiles that shorten the build/deploy loop

use super::{merge::upsert_profile, Build, PomModel, PomProperties, Profile};
use crate::error::Result;

/// A fixed profile definition
#[derive(Debug, Clone, Copy)]
pub struct ProfileTemplate {
    pub id: &'static str,
    pub default_goal: &'static str,
    pub properties: &'static [(&'static str, &'static str)],
}

impl ProfileTemplate {
    pub fn build(&self) -> Profile {
        Profile {
            id: self.id.to_string(),
            properties: self.properties.iter().copied().collect::<PomProperties>(),
            build: Some(Build {
                default_goal: Some(self.default_goal.to_string()),
                ..Default::default()
            }),
        }
    }
}

pub const FABRIC8_PROFILES: [ProfileTemplate; 3] = [
    ProfileTemplate {
        id: "f8-build",
        default_goal: "clean install docker:build fabric8:json",
        properties: &[],
    },
    ProfileTemplate {
        id: "f8-deploy",
        default_goal: "clean install docker:build docker:push fabric8:json fabric8:apply",
        properties: &[
            ("fabric8.imagePullPolicySnapshot", "Always"),
            ("fabric8.recreate", "true"),
        ],
    },
    ProfileTemplate {
        id: "f8-local-deploy",
        default_goal: "clean install docker:build fabric8:json fabric8:apply",
        properties: &[("fabric8.recreate", "true")],
    },
];

/// Upsert each `f8-*` profile independently; returns the ids that were added
pub fn upsert_fabric8_profiles(model: &mut PomModel) -> Result<Vec<&'static str>> {
    let mut added = Vec::new();
    for template in &FABRIC8_PROFILES {
        if upsert_profile(model, template.id, || template.build())? {
            added.push(template.id);
        }
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_profiles_added_to_empty_pom() {
        let mut model = PomModel::new("demo");
        let added = upsert_fabric8_profiles(&mut model).unwrap();
        assert_eq!(added, vec!["f8-build", "f8-deploy", "f8-local-deploy"]);

        let deploy = model.find_profile("f8-deploy").unwrap();
        assert_eq!(
            deploy.build_default_goal(),
            Some("clean install docker:build docker:push fabric8:json fabric8:apply")
        );
        assert_eq!(
            deploy.properties.get("fabric8.imagePullPolicySnapshot"),
            Some("Always")
        );
        assert!(model
            .find_profile("f8-build")
            .unwrap()
            .properties
            .is_empty());
    }

    #[test]
    fn test_partial_application() {
        let mut model = PomModel::new("demo");
        let mut custom = Profile::new("f8-build");
        custom.build = Some(Build {
            default_goal: Some("package".to_string()),
            ..Default::default()
        });
        model.profiles.push(custom);

        let added = upsert_fabric8_profiles(&mut model).unwrap();
        assert_eq!(added, vec!["f8-deploy", "f8-local-deploy"]);
        assert_eq!(
            model.find_profile("f8-build").unwrap().build_default_goal(),
            Some("package")
        );

        let again = upsert_fabric8_profiles(&mut model).unwrap();
        assert!(again.is_empty());
        assert_eq!(model.profiles.len(), 3);
    }
}
