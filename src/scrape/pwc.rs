// src/scrape/pwc.rs
//
// SOTA index → areas → subtasks → tasks → dataset pages.

use crate::config::consts::PWC_SOTA;
use crate::specs::{EntryRef, pwc};

use super::collect::Collector;

pub(super) fn walk(c: &mut Collector<'_>) {
    let mut areas = c.get_listing(PWC_SOTA).map(|p| pwc::parse_areas(&p)).unwrap_or_default();
    if areas.is_empty() {
        c.log("Papers with Code: no areas on the index, using built-in list");
        areas = pwc::fallback_areas();
    }

    for area in &areas {
        if c.exhausted() {
            break;
        }
        let Some(page) = c.get_listing(&area.url) else { continue };
        let subtasks = pwc::parse_subtasks(&page);
        c.log(&format!("{}: {} subtask(s)", area.name, subtasks.len()));

        for sub in &subtasks {
            if c.exhausted() {
                break;
            }
            // A /task/ link is already a task page.
            let tasks = if pwc::is_task_url(&sub.url) {
                vec![sub.clone()]
            } else {
                let Some(page) = c.get_listing(&sub.url) else { continue };
                let found = pwc::parse_tasks(&page);
                if found.is_empty() { vec![sub.clone()] } else { found }
            };

            for task in &tasks {
                if c.exhausted() {
                    break;
                }
                let Some(page) = c.get_listing(&task.url) else { continue };
                for ds in pwc::parse_datasets(&page) {
                    if c.exhausted() {
                        break;
                    }
                    c.visit(EntryRef {
                        url: ds.url,
                        name: ds.name,
                        area: area.name.clone(),
                        subtask: sub.name.clone(),
                        task: task.name.clone(),
                    });
                }
            }
        }
    }
}
