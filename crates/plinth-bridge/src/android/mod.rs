// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Each trait method invokes the corresponding
// Android API through JNI calls into the ART runtime.
//
// ## Architecture notes
//
// Everything here completes synchronously on the calling thread: package
// manager lookups and bitmap pixel extraction return their results directly;
// `startActivity` dispatches (clock, settings, web search) hand control to
// the OS and return once the intent is submitted, without tracking the
// resulting activity transition.

#![cfg(target_os = "android")]

use std::sync::OnceLock;

use image::RgbaImage;
use jni::objects::{JObject, JString, JValue};
use jni::{AttachGuard, JNIEnv, JavaVM};

use plinth_core::error::{PlinthError, Result};
use plinth_core::types::ComponentName;
use plinth_icon::IconSource;

use crate::traits::*;

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// `PackageManager.GET_META_DATA`.
const GET_META_DATA: i32 = 0x0000_0080;

/// First SDK level with a dedicated home-settings screen (Lollipop).
const SDK_LOLLIPOP: i32 = 21;

static VM: OnceLock<JavaVM> = OnceLock::new();

/// Obtain a [`JNIEnv`] handle from the global Android context.
///
/// Reads the `JavaVM*` pointer set by the NDK glue code once, caches the VM
/// for the process lifetime, and attaches the current thread if it is not
/// already attached.
fn jni_env() -> Result<AttachGuard<'static>> {
    let vm = match VM.get() {
        Some(vm) => vm,
        None => {
            let ctx = ndk_context::android_context();
            // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue
            // code. The pointer is guaranteed valid for the lifetime of the
            // process.
            let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
                .map_err(|e| PlinthError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
            VM.get_or_init(|| vm)
        }
    };
    vm.attach_current_thread()
        .map_err(|e| PlinthError::Bridge(format!("failed to attach JNI thread: {e}")))
}

/// Obtain the current Android `Activity` as a [`JObject`].
///
/// The pointer comes from `ndk_context::android_context().context()` which
/// is the `jobject` for whichever `Activity` hosts the native code.
fn activity() -> Result<JObject<'static>> {
    let ctx = ndk_context::android_context();
    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(PlinthError::Bridge(
            "Android context is null — native activity not initialised".into(),
        ));
    }
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the hosting Activity.
    Ok(unsafe { JObject::from_raw(ptr.cast()) })
}

/// Convenience: map any `jni::errors::Error` into `PlinthError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> PlinthError {
    PlinthError::Bridge(format!("{context}: {e}"))
}

/// Clear any pending Java exception, reporting whether one was pending.
fn clear_pending_exception(env: &mut JNIEnv<'_>) -> bool {
    if env.exception_check().unwrap_or(false) {
        let _ = env.exception_clear();
        true
    } else {
        false
    }
}

/// `obj instanceof class`, treating a missing class (older SDK) as false.
fn instance_of(env: &mut JNIEnv<'_>, obj: &JObject<'_>, class: &str) -> bool {
    match env.is_instance_of(obj, class) {
        Ok(result) => result,
        Err(_) => {
            clear_pending_exception(env);
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// Android implementation of the Plinth platform bridge.
///
/// All methods go through JNI to call the Android SDK. The only state held
/// on the Rust side is the configured web-search provider package.
pub struct AndroidBridge {
    search_provider: String,
}

impl AndroidBridge {
    /// Create a new Android bridge scoped to the given search provider.
    ///
    /// This does **not** touch JNI — the first JNI call happens lazily when
    /// a trait method is invoked.
    pub fn new(search_provider: String) -> Self {
        Self { search_provider }
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

// ---------------------------------------------------------------------------
// NativeShade — StatusBarManager.expandNotificationsPanel
// ---------------------------------------------------------------------------

impl NativeShade for AndroidBridge {
    /// Expand the notification shade via the `statusbar` system service.
    ///
    /// `expandNotificationsPanel` is not part of the public SDK; the call is
    /// resolved reflectively against the runtime class of the returned
    /// service object. On builds where hidden-API enforcement blocks it the
    /// failure surfaces as a `Bridge` error, which the channel logs and
    /// swallows — the caller always sees success.
    fn expand_notifications(&self) -> Result<()> {
        let mut env = jni_env()?;
        let activity = activity()?;

        tracing::info!("Android: expanding notification shade");

        let j_service: JString = env
            .new_string("statusbar")
            .map_err(|e| jni_err("new_string(statusbar)", e))?;

        let service: JObject = env
            .call_method(
                &activity,
                "getSystemService",
                "(Ljava/lang/String;)Ljava/lang/Object;",
                &[JValue::Object(&j_service)],
            )
            .map_err(|e| jni_err("getSystemService(statusbar)", e))?
            .l()
            .map_err(|e| jni_err("getSystemService->l", e))?;

        if service.is_null() {
            return Err(PlinthError::Bridge("statusbar service unavailable".into()));
        }

        env.call_method(&service, "expandNotificationsPanel", "()V", &[])
            .map_err(|e| {
                clear_pending_exception(&mut env);
                jni_err("expandNotificationsPanel", e)
            })?;

        tracing::info!("Android: notification shade trigger issued");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// NativeHomeSettings — Settings.ACTION_HOME_SETTINGS
// ---------------------------------------------------------------------------

impl NativeHomeSettings for AndroidBridge {
    /// Open the "default home app" settings screen.
    ///
    /// Pre-Lollipop devices have no dedicated screen, so the general
    /// settings intent is dispatched instead. Returns once the navigation
    /// intent is submitted; whether the user completes the change is never
    /// observed.
    fn open_home_settings(&self) -> Result<()> {
        let mut env = jni_env()?;
        let activity = activity()?;

        let sdk = env
            .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
            .map_err(|e| jni_err("Build.VERSION.SDK_INT", e))?
            .i()
            .map_err(|e| jni_err("SDK_INT->i", e))?;

        let action = if sdk >= SDK_LOLLIPOP {
            "android.settings.HOME_SETTINGS"
        } else {
            "android.settings.SETTINGS"
        };

        tracing::info!(sdk, action, "Android: opening home settings");

        let intent = new_intent(&mut env, action)?;
        start_activity(&mut env, &activity, &intent, "home settings")
    }
}

// ---------------------------------------------------------------------------
// NativeWebSearch — Intent.ACTION_WEB_SEARCH
// ---------------------------------------------------------------------------

impl NativeWebSearch for AndroidBridge {
    /// Dispatch a web-search intent scoped to the configured provider app,
    /// pre-filled with the query text.
    fn web_search(&self, query: &str) -> Result<()> {
        let mut env = jni_env()?;
        let activity = activity()?;

        tracing::info!(provider = %self.search_provider, "Android: dispatching web search");

        let intent = new_intent(&mut env, "android.intent.action.WEB_SEARCH")?;

        // intent.putExtra(SearchManager.QUERY, query)
        let j_key: JString = env
            .new_string("query")
            .map_err(|e| jni_err("new_string(QUERY)", e))?;
        let j_query: JString = env
            .new_string(query)
            .map_err(|e| jni_err("new_string(query)", e))?;

        env.call_method(
            &intent,
            "putExtra",
            "(Ljava/lang/String;Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&j_key), JValue::Object(&j_query)],
        )
        .map_err(|e| jni_err("putExtra(query)", e))?;

        // intent.setPackage(provider)
        let j_provider: JString = env
            .new_string(&self.search_provider)
            .map_err(|e| jni_err("new_string(provider)", e))?;

        env.call_method(
            &intent,
            "setPackage",
            "(Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&j_provider)],
        )
        .map_err(|e| jni_err("setPackage(provider)", e))?;

        start_activity(&mut env, &activity, &intent, "web search")
    }
}

// ---------------------------------------------------------------------------
// NativeAppRegistry — PackageManager lookups and activity launch
// ---------------------------------------------------------------------------

impl NativeAppRegistry for AndroidBridge {
    /// Load the installed app's icon via
    /// `PackageManager.getApplicationInfo(pkg, 0).loadIcon(pm)`.
    ///
    /// `BitmapDrawable` icons come back as a flat RGBA image;
    /// `AdaptiveIconDrawable` icons come back as their two layers, each
    /// rendered to an offscreen ARGB_8888 bitmap at the icon's intrinsic
    /// size. Any other drawable class is reported as unsupported with its
    /// class name.
    fn load_icon(&self, package: &str) -> Result<IconSource> {
        let mut env = jni_env()?;
        let activity = activity()?;

        tracing::info!(package, "Android: loading app icon");

        let pm = package_manager(&mut env, &activity)?;

        let j_package: JString = env
            .new_string(package)
            .map_err(|e| jni_err("new_string(package)", e))?;

        // A pending NameNotFoundException here means the package does not
        // exist on the device.
        let app_info: JObject = match env.call_method(
            &pm,
            "getApplicationInfo",
            "(Ljava/lang/String;I)Landroid/content/pm/ApplicationInfo;",
            &[JValue::Object(&j_package), JValue::Int(0)],
        ) {
            Ok(value) => value.l().map_err(|e| jni_err("getApplicationInfo->l", e))?,
            Err(e) => {
                if clear_pending_exception(&mut env) {
                    return Err(PlinthError::AppNotFound(package.to_string()));
                }
                return Err(jni_err("getApplicationInfo", e));
            }
        };

        let drawable: JObject = env
            .call_method(
                &app_info,
                "loadIcon",
                "(Landroid/content/pm/PackageManager;)Landroid/graphics/drawable/Drawable;",
                &[JValue::Object(&pm)],
            )
            .map_err(|e| jni_err("ApplicationInfo.loadIcon", e))?
            .l()
            .map_err(|e| jni_err("loadIcon->l", e))?;

        if instance_of(&mut env, &drawable, "android/graphics/drawable/BitmapDrawable") {
            let bitmap: JObject = env
                .call_method(
                    &drawable,
                    "getBitmap",
                    "()Landroid/graphics/Bitmap;",
                    &[],
                )
                .map_err(|e| jni_err("BitmapDrawable.getBitmap", e))?
                .l()
                .map_err(|e| jni_err("getBitmap->l", e))?;

            let image = bitmap_to_image(&mut env, &bitmap)?;
            tracing::debug!(package, width = image.width(), "Android: flat icon loaded");
            return Ok(IconSource::Flat(image));
        }

        // AdaptiveIconDrawable exists from API 26; instance_of treats a
        // missing class as false on older devices.
        if instance_of(
            &mut env,
            &drawable,
            "android/graphics/drawable/AdaptiveIconDrawable",
        ) {
            let width = env
                .call_method(&drawable, "getIntrinsicWidth", "()I", &[])
                .map_err(|e| jni_err("getIntrinsicWidth", e))?
                .i()
                .map_err(|e| jni_err("getIntrinsicWidth->i", e))?;
            let height = env
                .call_method(&drawable, "getIntrinsicHeight", "()I", &[])
                .map_err(|e| jni_err("getIntrinsicHeight", e))?
                .i()
                .map_err(|e| jni_err("getIntrinsicHeight->i", e))?;

            if width <= 0 || height <= 0 {
                return Err(PlinthError::Icon(format!(
                    "adaptive icon for {package} reported {width}x{height}"
                )));
            }
            let (width, height) = (width as u32, height as u32);

            let foreground = drawable_layer(&mut env, &drawable, "getForeground")?;
            let background = drawable_layer(&mut env, &drawable, "getBackground")?;

            let foreground = render_drawable(&mut env, &foreground, width, height)?;
            let background = render_drawable(&mut env, &background, width, height)?;

            tracing::debug!(package, width, height, "Android: adaptive icon layers loaded");
            return Ok(IconSource::Adaptive {
                foreground,
                background,
                width,
                height,
            });
        }

        let class_name = object_class_name(&mut env, &drawable)?;
        tracing::debug!(package, drawable = %class_name, "Android: unsupported drawable");
        Ok(IconSource::Unsupported(class_name))
    }

    /// Probe an activity via `PackageManager.getActivityInfo(cn,
    /// GET_META_DATA)`. A pending `NameNotFoundException` means the
    /// candidate is not installed.
    fn activity_exists(&self, component: &ComponentName) -> bool {
        let mut env = match jni_env() {
            Ok(env) => env,
            Err(_) => return false,
        };
        let activity = match activity() {
            Ok(activity) => activity,
            Err(_) => return false,
        };
        let pm = match package_manager(&mut env, &activity) {
            Ok(pm) => pm,
            Err(_) => return false,
        };

        let cn = match component_name_object(&mut env, component) {
            Ok(cn) => cn,
            Err(_) => {
                clear_pending_exception(&mut env);
                return false;
            }
        };

        let resolved = env
            .call_method(
                &pm,
                "getActivityInfo",
                "(Landroid/content/ComponentName;I)Landroid/content/pm/ActivityInfo;",
                &[JValue::Object(&cn), JValue::Int(GET_META_DATA)],
            )
            .is_ok();
        clear_pending_exception(&mut env);

        tracing::debug!(component = %component, resolved, "Android: activity probe");
        resolved
    }

    /// Launch the activity with a MAIN/LAUNCHER intent pinned to the given
    /// component. Hands control to the OS asynchronously.
    fn launch_activity(&self, component: &ComponentName) -> Result<()> {
        let mut env = jni_env()?;
        let activity = activity()?;

        tracing::info!(component = %component, "Android: launching activity");

        let intent = new_intent(&mut env, "android.intent.action.MAIN")?;

        let j_category: JString = env
            .new_string("android.intent.category.LAUNCHER")
            .map_err(|e| jni_err("new_string(CATEGORY_LAUNCHER)", e))?;

        env.call_method(
            &intent,
            "addCategory",
            "(Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&j_category)],
        )
        .map_err(|e| jni_err("addCategory(LAUNCHER)", e))?;

        let cn = component_name_object(&mut env, component)?;
        env.call_method(
            &intent,
            "setComponent",
            "(Landroid/content/ComponentName;)Landroid/content/Intent;",
            &[JValue::Object(&cn)],
        )
        .map_err(|e| jni_err("setComponent", e))?;

        start_activity(&mut env, &activity, &intent, "activity launch")
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// `activity.getPackageManager()`.
fn package_manager<'a>(env: &mut JNIEnv<'a>, activity: &JObject<'_>) -> Result<JObject<'a>> {
    env.call_method(
        activity,
        "getPackageManager",
        "()Landroid/content/pm/PackageManager;",
        &[],
    )
    .map_err(|e| jni_err("getPackageManager", e))?
    .l()
    .map_err(|e| jni_err("getPackageManager->l", e))
}

/// `new Intent(action)`.
fn new_intent<'a>(env: &mut JNIEnv<'a>, action: &str) -> Result<JObject<'a>> {
    let j_action: JString = env
        .new_string(action)
        .map_err(|e| jni_err("new_string(action)", e))?;
    env.new_object(
        "android/content/Intent",
        "(Ljava/lang/String;)V",
        &[JValue::Object(&j_action)],
    )
    .map_err(|e| jni_err("new Intent", e))
}

/// `new ComponentName(package, className)`.
fn component_name_object<'a>(
    env: &mut JNIEnv<'a>,
    component: &ComponentName,
) -> Result<JObject<'a>> {
    let j_package: JString = env
        .new_string(&component.package)
        .map_err(|e| jni_err("new_string(cn.package)", e))?;
    let j_class: JString = env
        .new_string(&component.class_name)
        .map_err(|e| jni_err("new_string(cn.class)", e))?;
    env.new_object(
        "android/content/ComponentName",
        "(Ljava/lang/String;Ljava/lang/String;)V",
        &[JValue::Object(&j_package), JValue::Object(&j_class)],
    )
    .map_err(|e| jni_err("new ComponentName", e))
}

/// `activity.startActivity(intent)`, clearing any pending exception so a
/// refused dispatch surfaces as a `Bridge` error rather than poisoning the
/// JNI thread.
fn start_activity(
    env: &mut JNIEnv<'_>,
    activity: &JObject<'_>,
    intent: &JObject<'_>,
    what: &str,
) -> Result<()> {
    env.call_method(
        activity,
        "startActivity",
        "(Landroid/content/Intent;)V",
        &[JValue::Object(intent)],
    )
    .map_err(|e| {
        clear_pending_exception(env);
        jni_err("startActivity", e)
    })?;

    tracing::info!(what, "Android: intent dispatched");
    Ok(())
}

/// `drawable.getForeground()` / `drawable.getBackground()`.
fn drawable_layer<'a>(
    env: &mut JNIEnv<'a>,
    drawable: &JObject<'_>,
    getter: &str,
) -> Result<JObject<'a>> {
    env.call_method(
        drawable,
        getter,
        "()Landroid/graphics/drawable/Drawable;",
        &[],
    )
    .map_err(|e| jni_err(getter, e))?
    .l()
    .map_err(|e| jni_err("layer->l", e))
}

/// Render a drawable into a fresh ARGB_8888 bitmap of the given size via an
/// offscreen `Canvas`, then extract the pixels.
fn render_drawable(
    env: &mut JNIEnv<'_>,
    drawable: &JObject<'_>,
    width: u32,
    height: u32,
) -> Result<RgbaImage> {
    // Bitmap.createBitmap(width, height, Bitmap.Config.ARGB_8888)
    let config: JObject = env
        .get_static_field(
            "android/graphics/Bitmap$Config",
            "ARGB_8888",
            "Landroid/graphics/Bitmap$Config;",
        )
        .map_err(|e| jni_err("Bitmap.Config.ARGB_8888", e))?
        .l()
        .map_err(|e| jni_err("ARGB_8888->l", e))?;

    let bitmap: JObject = env
        .call_static_method(
            "android/graphics/Bitmap",
            "createBitmap",
            "(IILandroid/graphics/Bitmap$Config;)Landroid/graphics/Bitmap;",
            &[
                JValue::Int(width as i32),
                JValue::Int(height as i32),
                JValue::Object(&config),
            ],
        )
        .map_err(|e| jni_err("Bitmap.createBitmap", e))?
        .l()
        .map_err(|e| jni_err("createBitmap->l", e))?;

    // new Canvas(bitmap)
    let canvas: JObject = env
        .new_object(
            "android/graphics/Canvas",
            "(Landroid/graphics/Bitmap;)V",
            &[JValue::Object(&bitmap)],
        )
        .map_err(|e| jni_err("new Canvas", e))?;

    // drawable.setBounds(0, 0, width, height); drawable.draw(canvas)
    env.call_method(
        drawable,
        "setBounds",
        "(IIII)V",
        &[
            JValue::Int(0),
            JValue::Int(0),
            JValue::Int(width as i32),
            JValue::Int(height as i32),
        ],
    )
    .map_err(|e| jni_err("Drawable.setBounds", e))?;

    env.call_method(
        drawable,
        "draw",
        "(Landroid/graphics/Canvas;)V",
        &[JValue::Object(&canvas)],
    )
    .map_err(|e| jni_err("Drawable.draw", e))?;

    bitmap_to_image(env, &bitmap)
}

/// Copy a Java `Bitmap`'s pixels into an [`RgbaImage`].
///
/// `Bitmap.getPixels` fills an `int[]` with packed ARGB; the channels are
/// reordered to RGBA on the way out.
fn bitmap_to_image(env: &mut JNIEnv<'_>, bitmap: &JObject<'_>) -> Result<RgbaImage> {
    let width = env
        .call_method(bitmap, "getWidth", "()I", &[])
        .map_err(|e| jni_err("Bitmap.getWidth", e))?
        .i()
        .map_err(|e| jni_err("getWidth->i", e))?;
    let height = env
        .call_method(bitmap, "getHeight", "()I", &[])
        .map_err(|e| jni_err("Bitmap.getHeight", e))?
        .i()
        .map_err(|e| jni_err("getHeight->i", e))?;

    if width <= 0 || height <= 0 {
        return Err(PlinthError::Icon(format!(
            "bitmap reported {width}x{height}"
        )));
    }

    let pixel_count = (width as usize) * (height as usize);
    let pixels = env
        .new_int_array(pixel_count as i32)
        .map_err(|e| jni_err("new_int_array", e))?;

    // bitmap.getPixels(pixels, 0, width, 0, 0, width, height)
    env.call_method(
        bitmap,
        "getPixels",
        "([IIIIIII)V",
        &[
            JValue::Object(&pixels),
            JValue::Int(0),
            JValue::Int(width),
            JValue::Int(0),
            JValue::Int(0),
            JValue::Int(width),
            JValue::Int(height),
        ],
    )
    .map_err(|e| jni_err("Bitmap.getPixels", e))?;

    let mut packed = vec![0i32; pixel_count];
    env.get_int_array_region(&pixels, 0, &mut packed)
        .map_err(|e| jni_err("get_int_array_region", e))?;

    let mut rgba = Vec::with_capacity(pixel_count * 4);
    for pixel in packed {
        let pixel = pixel as u32;
        rgba.push(((pixel >> 16) & 0xff) as u8);
        rgba.push(((pixel >> 8) & 0xff) as u8);
        rgba.push((pixel & 0xff) as u8);
        rgba.push(((pixel >> 24) & 0xff) as u8);
    }

    RgbaImage::from_raw(width as u32, height as u32, rgba)
        .ok_or_else(|| PlinthError::Icon("pixel buffer size mismatch".into()))
}

/// `obj.getClass().getName()` for diagnostics.
fn object_class_name(env: &mut JNIEnv<'_>, obj: &JObject<'_>) -> Result<String> {
    let class = env
        .get_object_class(obj)
        .map_err(|e| jni_err("getClass", e))?;
    let name: JObject = env
        .call_method(&class, "getName", "()Ljava/lang/String;", &[])
        .map_err(|e| jni_err("Class.getName", e))?
        .l()
        .map_err(|e| jni_err("getName->l", e))?;
    let name: String = env
        .get_string(&JString::from(name))
        .map_err(|e| jni_err("get_string(className)", e))?
        .into();
    Ok(name)
}
