use super::*;
use std::collections::HashSet;

#[test]
fn project_ids_should_be_unique() {
    let ids = projects().iter().map(|p| p.id).collect::<HashSet<_>>();
    assert_eq!(projects().len(), ids.len());
}

#[test]
fn project_lookup_should_work() {
    for expected in projects() {
        let found = project(expected.id).expect("project should exist");
        assert_eq!(expected, found);
    }

    assert!(project(ProjectId(u32::MAX)).is_none());
}

#[test]
fn tech_preview_should_split_stack() {
    let project = &projects()[0];
    let (shown, rest) = project.tech_preview(3);
    assert_eq!(&project.tech_stack[..3], shown);
    assert_eq!(project.tech_stack.len() - 3, rest);

    let (shown, rest) = project.tech_preview(100);
    assert_eq!(project.tech_stack, shown);
    assert_eq!(0, rest);

    let (shown, rest) = project.tech_preview(0);
    assert!(shown.is_empty());
    assert_eq!(project.tech_stack.len(), rest);
}

#[test]
fn skill_level_should_be_clamped() {
    let skill = Skill {
        name: "Overconfidence",
        level: 250,
    };
    assert_eq!(100, skill.level());

    for category in skill_categories() {
        assert!(!category.skills.is_empty());
        for skill in category.skills {
            assert_eq!(skill.level, skill.level());
        }
    }
}

#[test]
fn content_should_be_populated() {
    assert!(!profile().name.is_empty());
    assert_eq!(4, social_links().len());
    assert_eq!(3, features().len());
    assert_eq!(3, skill_categories().len());
    assert_eq!(2, education().len());
    assert_eq!(3, contact_channels().len());
    assert!(!additional_technologies().is_empty());
}
