use utoipa::OpenApi;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, LoginRequest, LogoutResponse, RegisterRequest, User};
use crate::modules::classes::model::{Class, CreateClassDto, UpdateClassDto};
use crate::modules::cosmetics::model::{Cosmetic, CreateCosmeticDto, UpdateCosmeticDto};
use crate::modules::groups::model::{CreateGroupDto, Group, UpdateGroupDto};
use crate::modules::invites::model::{InviteRequest, InviteResponse};
use crate::modules::rewards::model::{CreateRewardDto, Reward, UpdateRewardDto};
use crate::modules::skills::model::{CreateSkillDto, Skill, UpdateSkillDto};
use crate::modules::students::model::Student;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_student,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_class,
        crate::modules::classes::controller::update_class,
        crate::modules::classes::controller::delete_class,
        crate::modules::groups::controller::create_group,
        crate::modules::groups::controller::get_groups,
        crate::modules::groups::controller::get_group,
        crate::modules::groups::controller::update_group,
        crate::modules::groups::controller::delete_group,
        crate::modules::skills::controller::create_skill,
        crate::modules::skills::controller::get_skills,
        crate::modules::skills::controller::get_skill,
        crate::modules::skills::controller::update_skill,
        crate::modules::skills::controller::delete_skill,
        crate::modules::cosmetics::controller::create_cosmetic,
        crate::modules::cosmetics::controller::get_cosmetics,
        crate::modules::cosmetics::controller::get_cosmetic,
        crate::modules::cosmetics::controller::update_cosmetic,
        crate::modules::cosmetics::controller::delete_cosmetic,
        crate::modules::rewards::controller::create_reward,
        crate::modules::rewards::controller::get_rewards,
        crate::modules::rewards::controller::get_reward,
        crate::modules::rewards::controller::update_reward,
        crate::modules::rewards::controller::delete_reward,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::invites::controller::send_invites,
    ),
    components(
        schemas(
            User,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            LogoutResponse,
            ErrorResponse,
            Class,
            CreateClassDto,
            UpdateClassDto,
            Group,
            CreateGroupDto,
            UpdateGroupDto,
            Skill,
            CreateSkillDto,
            UpdateSkillDto,
            Cosmetic,
            CreateCosmeticDto,
            UpdateCosmeticDto,
            Reward,
            CreateRewardDto,
            UpdateRewardDto,
            Student,
            InviteRequest,
            InviteResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Student registration and login"),
        (name = "Classes", description = "Class management endpoints"),
        (name = "Groups", description = "Group management endpoints"),
        (name = "Skills", description = "Skill catalog endpoints"),
        (name = "Cosmetics", description = "Cosmetic catalog endpoints"),
        (name = "Rewards", description = "Reward and punishment catalog endpoints"),
        (name = "Students", description = "Student directory endpoints"),
        (name = "Invites", description = "Class invitation endpoints")
    ),
    info(
        title = "Classquest API",
        version = "0.1.0",
        description = "A gamified classroom-management REST API built with Rust, Axum, and PostgreSQL.",
        contact(
            name = "API Support",
            email = "support@classquest.app"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
