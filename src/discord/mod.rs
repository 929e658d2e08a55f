use poise::serenity_prelude::Permissions;

use crate::{Data, Error};

mod discord_helper;
mod result_commands;

pub(crate) fn commands() -> Vec<poise::Command<Data, Error>> {
    let mut cmds: Vec<poise::Command<Data, Error>> = vec![result_commands::register_result()];

    let admin_cmds: Vec<poise::Command<Data, Error>> = vec![
        result_commands::list_results(),
        result_commands::delete_result(),
    ];

    for mut admin_cmd in admin_cmds.into_iter() {
        admin_cmd.required_permissions = Permissions::ADMINISTRATOR;
        admin_cmd.default_member_permissions = Permissions::ADMINISTRATOR;
        cmds.push(admin_cmd);
    }

    cmds
}
